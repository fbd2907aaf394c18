fn main() {
    // Run the CLI
    tocsmith::cli::run();
}
