fn main() {
    kool_preset::app::cli::run();
}
