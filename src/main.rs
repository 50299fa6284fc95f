fn main() {
    dsgen::app::cli::run();
}
