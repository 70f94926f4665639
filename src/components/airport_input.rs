// ============================================================================
// AIRPORT INPUT - Autocomplete against the backend airports table
// ============================================================================

use std::fmt;
use yew::prelude::*;

use crate::components::elements::{Input, InputKind, Label};
use crate::models::Airport;
use crate::services::{airports, ApiClient};

/// Which end of the flight this input selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirportField {
    Origin,
    Destination,
}

impl fmt::Display for AirportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirportField::Origin => write!(f, "Origin"),
            AirportField::Destination => write!(f, "Destination"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AirportInputProps {
    pub client: ApiClient,
    pub field: AirportField,
    /// Fired once the user picks a candidate.
    pub on_select: Callback<(Airport, AirportField)>,
}

/// Free-text search over airport codes and cities. Typing queries the
/// backend and lists candidates; picking one locks the field to that
/// airport's code and notifies the parent form.
#[function_component(AirportInput)]
pub fn airport_input(props: &AirportInputProps) -> Html {
    let query = use_state(String::new);
    let candidates = use_state(Vec::<Airport>::new);

    let oninput = {
        let query = query.clone();
        let candidates = candidates.clone();
        let client = props.client.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<web_sys::HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            query.set(value.clone());

            if value.len() < 2 {
                candidates.set(Vec::new());
                return;
            }

            let candidates = candidates.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match airports::search_airports(&client, &value).await {
                    Ok(found) => candidates.set(found),
                    Err(err) => log::error!("❌ Airport search failed: {err}"),
                }
            });
        })
    };

    let pick = |airport: Airport| {
        let query = query.clone();
        let candidates = candidates.clone();
        let on_select = props.on_select.clone();
        let field = props.field;
        Callback::from(move |_: MouseEvent| {
            query.set(airport.code().to_string());
            candidates.set(Vec::new());
            on_select.emit((airport.clone(), field));
        })
    };

    html! {
        <div>
            <Label text={props.field.to_string()} required=true />
            <Input
                kind={InputKind::Text}
                value={(*query).clone()}
                placeholder="AMS, Amsterdam, ..."
                oninput={oninput}
            />
            <ul class="-mt-3 mb-2">
                { for candidates.iter().map(|airport| html! {
                    <li>
                        <button
                            type="button"
                            class="w-full text-left px-1 py-0.5 hover:bg-gray-100"
                            onclick={pick(airport.clone())}
                        >
                            { format!("{} — {}/{}", airport.code(), airport.city, airport.country) }
                        </button>
                    </li>
                }) }
            </ul>
        </div>
    }
}
