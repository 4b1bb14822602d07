mod app;
mod hint;
mod view;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
