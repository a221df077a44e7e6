fn main() {
    instajob_preview::run();
}
