fn main() {
    sd::term::main();
}
