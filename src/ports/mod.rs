mod script_filesystem;

pub use script_filesystem::ScriptFilesystem;
