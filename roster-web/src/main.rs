fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(roster_web::App);
}
