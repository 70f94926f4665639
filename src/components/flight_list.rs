// ============================================================================
// FLIGHT LIST - Landing screen, one row per logged flight
// ============================================================================

use yew::prelude::*;

use crate::components::app::Route;
use crate::components::elements::{Button, ButtonLevel, Heading, Whisper};
use crate::models::Flight;
use crate::services::{flights, ApiClient};

#[derive(Properties, PartialEq)]
pub struct FlightListProps {
    pub client: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[function_component(FlightList)]
pub fn flight_list(props: &FlightListProps) -> Html {
    let flights = use_state(Vec::<Flight>::new);
    let loading = use_state(|| true);

    {
        let flights = flights.clone();
        let loading = loading.clone();
        let client = props.client.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match flights::list_flights(&client).await {
                    Ok(fetched) => flights.set(fetched),
                    Err(err) => log::error!("❌ Could not load flights: {err}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let new_flight = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::NewFlight))
    };

    html! {
        <>
            <Heading text="Flights" />
            <Button text="New flight" level={ButtonLevel::Success} onclick={new_flight} />

            if *loading {
                <p>{ "Loading..." }</p>
            } else if flights.is_empty() {
                <Whisper text="No flights logged yet." />
            } else {
                <ul class="mt-3">
                    { for flights.iter().map(|flight| row(flight, &props.on_navigate)) }
                </ul>
            }
        </>
    }
}

fn row(flight: &Flight, on_navigate: &Callback<Route>) -> Html {
    let open = {
        let on_navigate = on_navigate.clone();
        let id = flight.id;
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::SingleFlight(id)))
    };

    let number = flight.flight_number.clone().unwrap_or_default();

    html! {
        <li key={flight.id}>
            <button
                type="button"
                class="w-full text-left px-1 py-1 border-b border-gray-200 hover:bg-gray-100"
                onclick={open}
            >
                { format!("{}  {} → {}  {}",
                          flight.date,
                          flight.origin.short_code(),
                          flight.destination.short_code(),
                          number) }
            </button>
        </li>
    }
}
