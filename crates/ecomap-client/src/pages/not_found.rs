//! 404 page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page-not-found">
            <h1>{ "404" }</h1>
            <p>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home}>{ "Back to the map" }</Link<Route>>
        </div>
    }
}
