// ============================================================================
// SINGLE FLIGHT - Detail view for one record
// ============================================================================

use yew::prelude::*;

use crate::components::app::Route;
use crate::components::elements::{Button, ButtonLevel, Heading, Subheading};
use crate::hooks::use_flight;
use crate::services::{flights, ApiClient};

#[derive(Properties, PartialEq)]
pub struct SingleFlightProps {
    pub client: ApiClient,
    pub id: i64,
    pub on_navigate: Callback<Route>,
}

#[function_component(SingleFlight)]
pub fn single_flight(props: &SingleFlightProps) -> Html {
    let flight = use_flight(props.client.clone(), props.id);

    let Some(flight) = (*flight).clone() else {
        return html! { <p>{ "Loading..." }</p> };
    };

    let on_delete = {
        let client = props.client.clone();
        let on_navigate = props.on_navigate.clone();
        let id = flight.id;
        Callback::from(move |_: MouseEvent| {
            if !confirm("Are you sure?") {
                return;
            }
            let client = client.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if flights::delete_flight(&client, id).await.is_ok() {
                    on_navigate.emit(Route::Flights);
                }
            });
        })
    };

    html! {
        <>
            <Heading text={format!("{} to {}",
                                   flight.origin.short_code(),
                                   flight.destination.short_code())} />
            <h2 class="-mt-4 mb-4 text-xl">{ &flight.date }</h2>

            <div class="flex">
                <div class="container">
                    <Subheading text="Timings" />

                    <p>{ "Date: " }<span>{ &flight.date }</span></p>
                    <p>{ "Departure Time: " }<span>{ or_na(flight.departure_time.clone()) }</span></p>
                    <p>{ "Arrival Time: " }<span>{ or_na(flight.arrival_time.clone()) }</span></p>
                    <p>{ "Duration: " }<span>{ or_na(flight.duration.map(|d| format!("{d} min"))) }</span></p>
                </div>

                <div class="container">
                    <Subheading text="Airports" />

                    <p>{ "Origin: " }
                        <span>{ format!("{} ({}/{})",
                                        flight.origin.code(),
                                        flight.origin.city,
                                        flight.origin.country) }</span></p>
                    <p>{ "Destination: " }
                        <span>{ format!("{} ({}/{})",
                                        flight.destination.code(),
                                        flight.destination.city,
                                        flight.destination.country) }</span></p>
                    <p>{ "Distance: " }<span>{ or_na(flight.distance.map(|d| format!("{d} km"))) }</span></p>
                </div>

                <div class="container">
                    <Subheading text="Other" />

                    <p>{ "Seat: " }<span>{ or_na(flight.seat.map(|s| s.to_string())) }</span></p>
                    <p>{ "Class: " }<span>{ or_na(flight.ticket_class.map(|c| c.to_string())) }</span></p>
                    <p>{ "Airplane: " }<span>{ or_na(flight.airplane.clone()) }</span></p>
                    <p>{ "Notes: " }<span>{ or_na(flight.notes.clone()) }</span></p>
                </div>
            </div>

            <br />

            <Button text="Delete" level={ButtonLevel::Danger} onclick={on_delete} />
        </>
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
