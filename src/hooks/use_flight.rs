use yew::prelude::*;

use crate::models::Flight;
use crate::services::{flights, ApiClient};

/// Fetch one flight by id on mount. `None` until the response arrives;
/// stays `None` when the fetch fails (the client already alerted).
#[hook]
pub fn use_flight(client: ApiClient, id: i64) -> UseStateHandle<Option<Flight>> {
    let flight = use_state(|| None::<Flight>);

    {
        let flight = flight.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                match flights::get_flight(&client, id).await {
                    Ok(fetched) => flight.set(Some(fetched)),
                    Err(err) => log::error!("❌ Could not load flight {id}: {err}"),
                }
            });
            || ()
        });
    }

    flight
}
