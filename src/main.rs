fn main() {
    goldrun::cli::run();
}
