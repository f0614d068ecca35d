fn main() {
    aws_switcher::main();
}
