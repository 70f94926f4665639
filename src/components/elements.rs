// ============================================================================
// ELEMENTS - Presentational form controls
// ============================================================================
// Stateless building blocks shared by the screens. No data fetching here.
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::HtmlDialogElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeadingProps {
    pub text: AttrValue,
}

#[function_component(Heading)]
pub fn heading(props: &HeadingProps) -> Html {
    html! {
        <h1 class="mb-3 text-3xl font-bold">{ &props.text }</h1>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubheadingProps {
    pub text: AttrValue,
}

#[function_component(Subheading)]
pub fn subheading(props: &SubheadingProps) -> Html {
    html! {
        <h3 class="mb-2 font-bold text-lg">{ &props.text }</h3>
    }
}

#[derive(Properties, PartialEq)]
pub struct WhisperProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub negative_top_margin: bool,
}

#[function_component(Whisper)]
pub fn whisper(props: &WhisperProps) -> Html {
    let margin = if props.negative_top_margin { "-mt-4" } else { "" };
    html! {
        <p class={format!("{margin} text-sm font-mono text-gray-700/60")}>
            { &props.text }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct LabelProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(Label)]
pub fn label(props: &LabelProps) -> Html {
    let marker = if props.required {
        "after:content-['*'] after:ml-0.5 after:text-red-500"
    } else {
        ""
    };
    html! {
        <label class={format!("{marker} mb-1 font-semibold block")}>
            { &props.text }
        </label>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLevel {
    #[default]
    Default,
    Success,
    Danger,
}

impl ButtonLevel {
    fn colors(self) -> &'static str {
        match self {
            ButtonLevel::Success => "bg-green-500 text-white enabled:hover:bg-green-400",
            ButtonLevel::Danger => "bg-red-500 text-white enabled:hover:bg-red-400",
            ButtonLevel::Default => {
                "bg-white text-black border border-gray-300 enabled:hover:bg-gray-100"
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub level: ButtonLevel,
    #[prop_or_default]
    pub right: bool,
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let float = if props.right { "float-right" } else { "" };
    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            class={format!("py-1 px-2 my-1 mr-1 rounded-md cursor-pointer {} \
                            disabled:opacity-60 disabled:cursor-not-allowed {float}",
                           props.level.colors())}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { &props.text }
        </button>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    Number,
    Date,
    Time,
    File,
}

impl InputKind {
    fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Number => "number",
            InputKind::Date => "date",
            InputKind::Time => "time",
            InputKind::File => "file",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub kind: InputKind,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub maxlength: Option<AttrValue>,
    #[prop_or_default]
    pub oninput: Option<Callback<InputEvent>>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let width = if matches!(props.kind, InputKind::Text | InputKind::Password) {
        "w-full"
    } else {
        ""
    };
    html! {
        <input
            class={format!("{width} px-1 mb-4 bg-white rounded-none outline-none font-mono box-border \
                            placeholder:italic border-b-2 border-gray-200 focus:border-primary-400")}
            type={props.kind.as_str()}
            accept={(props.kind == InputKind::File).then_some(".csv,.db")}
            name={props.name.clone()}
            value={props.value.clone()}
            maxlength={props.maxlength.clone()}
            min={(props.kind == InputKind::Number).then_some("0")}
            oninput={props.oninput.clone()}
            required={props.required}
            placeholder={props.placeholder.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub maxlength: Option<AttrValue>,
    #[prop_or_default]
    pub oninput: Option<Callback<InputEvent>>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    html! {
        <textarea
            rows="5"
            class="w-full px-1 mb-4 bg-white rounded-none outline-none font-mono box-border \
                   border-2 border-gray-200 focus:border-primary-400"
            name={props.name.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            maxlength={props.maxlength.clone()}
            oninput={props.oninput.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub onchange: Option<Callback<Event>>,
}

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    html! {
        <input
            class="ml-5 bg-white rounded-none outline-none box-border border-2 \
                   border-gray-200 hover:border-primary-400"
            type="checkbox"
            name={props.name.clone()}
            onchange={props.onchange.clone()}
            checked={props.checked}
        />
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub text: AttrValue,
    pub value: AttrValue,
}

impl SelectOption {
    pub fn new(text: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    #[prop_or_default]
    pub name: Option<AttrValue>,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub onchange: Option<Callback<Event>>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    html! {
        <select
            class="px-1 py-0.5 mb-4 bg-white rounded-none outline-none font-mono box-border \
                   border-b-2 border-gray-200 focus:border-primary-400"
            name={props.name.clone()}
            onchange={props.onchange.clone()}
        >
            { for props.options.iter().map(|option| {
                let selected = props.value.as_ref() == Some(&option.value);
                html! {
                    <option value={option.value.clone()} selected={selected}>
                        { &option.text }
                    </option>
                }
            }) }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub title: AttrValue,
    /// Unique per page; identifies the underlying `<dialog>` element so
    /// several dialogs can coexist.
    pub modal_key: AttrValue,
    #[prop_or_default]
    pub button_level: ButtonLevel,
    pub on_submit: Callback<SubmitEvent>,
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let open = {
        let key = props.modal_key.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(dialog) = dialog_by_id(&key) {
                let _ = dialog.show_modal();
            }
        })
    };

    let close = {
        let key = props.modal_key.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(dialog) = dialog_by_id(&key) {
                dialog.close();
            }
        })
    };

    let on_submit = {
        let key = props.modal_key.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            if let Some(dialog) = dialog_by_id(&key) {
                dialog.close();
            }
            event.prevent_default();
            on_submit.emit(event);
        })
    };

    html! {
        <>
            <Button text={props.title.clone()} level={props.button_level} onclick={open} />

            <dialog id={props.modal_key.clone()} class="md:w-2/3 max-md:w-4/5 rounded-md">
                <form class="flex flex-col" onsubmit={on_submit}>
                    <div class="pl-5 pt-2 border-b border-b-gray-400">
                        <Subheading text={props.title.clone()} />
                    </div>

                    <div class="p-5">
                        { props.children.clone() }
                    </div>

                    <div class="px-5 py-2 border-t border-t-gray-400">
                        <Button text="Cancel" onclick={close} />
                        <Button text="Done" level={ButtonLevel::Success} right=true submit=true />
                    </div>
                </form>
            </dialog>
        </>
    }
}

fn dialog_by_id(id: &str) -> Option<HtmlDialogElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlDialogElement>()
        .ok()
}
