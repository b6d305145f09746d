fn main() {
    garage_ui::mount();
}
