fn main() {
    dioxus::launch(shop_mocks::App);
}
