fn main() {
    leptos::mount::mount_to_body(navhub_dashboard::App);
}
