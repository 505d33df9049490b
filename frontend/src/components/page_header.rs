use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Call to action rendered under the description.
    #[prop_or_default]
    pub button_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_button: Callback<MouseEvent>,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <header class="relative w-full bg-slate-950 text-white py-16 px-6 pt-32 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 opacity-10 blur-3xl"></div>
            <div class="max-w-4xl mx-auto text-center relative z-10">
                <h1 class="text-4xl md:text-5xl font-extrabold bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 bg-clip-text text-transparent mb-4">
                    { &props.title }
                </h1>
                if let Some(description) = &props.description {
                    <p class="text-slate-300 max-w-2xl mx-auto text-lg md:text-xl leading-relaxed">{ description }</p>
                }
                if let Some(label) = &props.button_label {
                    <button onclick={props.on_button.clone()}
                        class="mt-8 bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 text-white px-6 py-3 rounded-full font-semibold shadow-lg">
                        { label }
                    </button>
                }
            </div>
        </header>
    }
}
