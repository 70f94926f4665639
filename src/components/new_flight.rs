// ============================================================================
// NEW FLIGHT - Two-step creation flow
// ============================================================================
// Step 1 (ChooseMode): optional flight number, or straight to manual entry.
// Step 2 (FlightDetails): manual form; duration and distance are derived
// from the draft right before the record is posted.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::airport_input::{AirportField, AirportInput};
use crate::components::app::Route;
use crate::components::elements::{
    Button, ButtonLevel, Heading, Input, InputKind, Label, Select, SelectOption, TextArea,
};
use crate::models::{ClassOfService, FlightDraft, Seat};
use crate::services::{flights, ApiClient};

#[derive(Properties, PartialEq)]
pub struct NewFlightProps {
    pub client: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[function_component(NewFlight)]
pub fn new_flight(props: &NewFlightProps) -> Html {
    let flight_number = use_state(String::new);
    let submitted = use_state(|| false);

    let on_change = {
        let flight_number = flight_number.clone();
        Callback::from(move |value: String| flight_number.set(value))
    };
    let on_proceed = {
        let submitted = submitted.clone();
        Callback::from(move |_: ()| submitted.set(true))
    };

    html! {
        <>
            <Heading text="New flight" />

            if *submitted {
                <FlightDetails
                    client={props.client.clone()}
                    flight_number={(*flight_number).clone()}
                    on_navigate={props.on_navigate.clone()}
                />
            } else {
                <ChooseMode
                    flight_number={(*flight_number).clone()}
                    on_change={on_change}
                    on_proceed={on_proceed}
                />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ChooseModeProps {
    pub flight_number: String,
    pub on_change: Callback<String>,
    pub on_proceed: Callback<()>,
}

// TODO: when a flight number is given, seed the manual form from a flight
// tracker API instead of just carrying the number over. Deliberately left
// out for now; there is no obvious free provider.
#[function_component(ChooseMode)]
fn choose_mode(props: &ChooseModeProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_change.emit(value.to_uppercase());
        })
    };

    let next = {
        let on_proceed = props.on_proceed.clone();
        Callback::from(move |_: MouseEvent| on_proceed.emit(()))
    };
    let manually = {
        let on_proceed = props.on_proceed.clone();
        Callback::from(move |_: MouseEvent| on_proceed.emit(()))
    };

    html! {
        <form onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}>
            <Label text="Flight Number" />
            <Input
                kind={InputKind::Text}
                value={props.flight_number.clone()}
                placeholder="KL1234"
                oninput={oninput}
            />
            <br />
            <Button
                text="Next"
                level={ButtonLevel::Success}
                disabled={props.flight_number.is_empty()}
                onclick={next}
            />
            <Button text="Continue manually" onclick={manually} />
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FlightDetailsProps {
    pub client: ApiClient,
    pub flight_number: String,
    pub on_navigate: Callback<Route>,
}

#[function_component(FlightDetails)]
fn flight_details(props: &FlightDetailsProps) -> Html {
    let draft = {
        let flight_number = props.flight_number.clone();
        use_state(move || FlightDraft {
            flight_number: (!flight_number.is_empty()).then_some(flight_number),
            date: today(),
            ..FlightDraft::default()
        })
    };

    // every field edit produces a fresh draft, no in-place mutation
    let update = |apply: fn(&mut FlightDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let on_date = update(|draft, value| draft.date = value);
    let on_departure =
        update(|draft, value| draft.departure_time = (!value.is_empty()).then_some(value));
    let on_arrival =
        update(|draft, value| draft.arrival_time = (!value.is_empty()).then_some(value));
    let on_airplane = update(|draft, value| draft.airplane = (!value.is_empty()).then_some(value));
    let on_notes = update(|draft, value| draft.notes = (!value.is_empty()).then_some(value));
    let on_seat = update(|draft, value| {
        draft.seat = match value.as_str() {
            "aisle" => Some(Seat::Aisle),
            "middle" => Some(Seat::Middle),
            "window" => Some(Seat::Window),
            _ => None,
        }
    });
    let on_class = update(|draft, value| {
        draft.ticket_class = match value.as_str() {
            "private" => Some(ClassOfService::Private),
            "first" => Some(ClassOfService::First),
            "business" => Some(ClassOfService::Business),
            "economy+" => Some(ClassOfService::EconomyPlus),
            "economy" => Some(ClassOfService::Economy),
            _ => None,
        }
    });

    let set_airport = {
        let draft = draft.clone();
        Callback::from(move |(airport, field): (crate::models::Airport, AirportField)| {
            let mut next = (*draft).clone();
            match field {
                AirportField::Origin => next.origin = Some(airport),
                AirportField::Destination => next.destination = Some(airport),
            }
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let client = props.client.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            // derived fields are recomputed here, on every attempt
            let Some(payload) = draft.to_submission() else {
                return;
            };

            let client = client.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // on failure the client has already alerted; stay on the form
                if flights::create_flight(&client, &payload).await.is_ok() {
                    on_navigate.emit(Route::Flights);
                }
            });
        })
    };

    html! {
        <form onsubmit={on_submit}>
            <div class="container">
                <AirportInput
                    client={props.client.clone()}
                    field={AirportField::Origin}
                    on_select={set_airport.clone()}
                />
                <br />
                <AirportInput
                    client={props.client.clone()}
                    field={AirportField::Destination}
                    on_select={set_airport}
                />
                <br />
                <Label text="Date" required=true />
                <Input
                    kind={InputKind::Date}
                    name="date"
                    value={draft.date.clone()}
                    oninput={input_string(on_date)}
                    required=true
                />
            </div>

            <div class="container">
                <Label text="Departure Time" />
                <Input
                    kind={InputKind::Time}
                    name="departureTime"
                    value={draft.departure_time.clone().unwrap_or_default()}
                    oninput={input_string(on_departure)}
                />
                <br />
                <Label text="Arrival Time" />
                <Input
                    kind={InputKind::Time}
                    name="arrivalTime"
                    value={draft.arrival_time.clone().unwrap_or_default()}
                    oninput={input_string(on_arrival)}
                />
            </div>

            <div class="container">
                <Label text="Seat Type" />
                <Select
                    name="seat"
                    value={draft.seat.map(|seat| AttrValue::from(seat.to_string()))}
                    options={vec![
                        SelectOption::new("Select", ""),
                        SelectOption::new("Aisle", "aisle"),
                        SelectOption::new("Middle", "middle"),
                        SelectOption::new("Window", "window"),
                    ]}
                    onchange={select_string(on_seat)}
                />
                <br />
                <Label text="Class" />
                <Select
                    name="ticketClass"
                    value={draft.ticket_class.map(|class| AttrValue::from(class.to_string()))}
                    options={vec![
                        SelectOption::new("Select", ""),
                        SelectOption::new("Private", "private"),
                        SelectOption::new("First", "first"),
                        SelectOption::new("Business", "business"),
                        SelectOption::new("Economy+", "economy+"),
                        SelectOption::new("Economy", "economy"),
                    ]}
                    onchange={select_string(on_class)}
                />
                <br />
                <Label text="Airplane" />
                <Input
                    kind={InputKind::Text}
                    name="airplane"
                    value={draft.airplane.clone().unwrap_or_default()}
                    placeholder="B738"
                    oninput={input_string(on_airplane)}
                />
                <br />
                <Label text="Notes" />
                <TextArea
                    name="notes"
                    value={draft.notes.clone().unwrap_or_default()}
                    oninput={textarea_string(on_notes)}
                />
            </div>
            <br />
            <Button
                text="Done"
                level={ButtonLevel::Success}
                submit=true
                disabled={!draft.is_submittable()}
            />
        </form>
    }
}

/// Today's local date, ISO formatted, as the date input expects it.
fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

fn input_string(callback: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default();
        callback.emit(value);
    })
}

fn textarea_string(callback: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default();
        callback.emit(value);
    })
}

fn select_string(callback: Callback<String>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let value = event
            .target_dyn_into::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default();
        callback.emit(value);
    })
}
