// ============================================================================
// APP - Screen switching and shared API client
// ============================================================================

use yew::prelude::*;

use crate::components::{FlightList, NewFlight, SingleFlight};
use crate::services::ApiClient;

/// The screens of the app. Swapped by state, no router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Flights,
    NewFlight,
    SingleFlight(i64),
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::Flights);
    // one client for the whole app, handed down through props
    let client = use_state(ApiClient::new);

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::info!("🧭 Navigating to {next:?}");
            route.set(next);
        })
    };

    let client = (*client).clone();

    html! {
        <div class="m-8 font-mono">
            {
                match *route {
                    Route::Flights => html! {
                        <FlightList client={client} on_navigate={navigate} />
                    },
                    Route::NewFlight => html! {
                        <NewFlight client={client} on_navigate={navigate} />
                    },
                    Route::SingleFlight(id) => html! {
                        <SingleFlight client={client} id={id} on_navigate={navigate} />
                    },
                }
            }
        </div>
    }
}
