use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    /// Wire name of the field; also used as the input id.
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    /// Receives `(name, value)` on every keystroke.
    pub on_change: Callback<(String, String)>,
}

/// Labelled input with an inline error line.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let name = props.name.to_string();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((name.clone(), input.value()));
        })
    };

    html! {
        <div class="space-y-1">
            <label for={props.name.clone()} class="block text-sm font-medium text-gray-300">{ &props.label }</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
                class={classes!(
                    "w-full", "px-4", "py-3", "bg-slate-800/60", "rounded-xl", "text-white",
                    "placeholder:text-gray-500", "focus:outline-none", "transition", "border",
                    if props.error.is_some() { "border-red-500" } else { "border-slate-700 focus:border-orange-500" }
                )}
            />
            if let Some(error) = &props.error {
                <p class="text-red-400 text-xs">{ error }</p>
            }
        </div>
    }
}
