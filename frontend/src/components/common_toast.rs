use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-[#1a2235] border-green-500",
            ToastType::Error => "bg-[#1a2235] border-red-500",
            ToastType::Warning => "bg-[#1a2235] border-yellow-500",
            ToastType::Info => "bg-[#1a2235] border-orange-500",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Warning => "⚠",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Some(4000),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }
}

/// The visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList(pub Vec<Toast>);

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList(toasts))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            toasts.dispatch(ToastAction::Add(toast));

            // Auto-remove after duration if specified
            if let Some(duration_ms) = duration {
                let toasts = toasts.clone();
                Timeout::new(duration_ms, move || toasts.dispatch(ToastAction::Remove(toast_id)))
                    .forget();
            }
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: toasts.0.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastStack />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-[60] space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let visible = use_state(|| false);

    // Animate in
    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(10, move || visible.set(true));
            move || drop(timeout)
        });
    }

    let on_close = {
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| toast_context.remove_toast.emit(toast_id))
    };

    html! {
        <div class={classes!(
            "transform", "transition-all", "duration-300", "ease-in-out",
            if *visible { "translate-x-0 opacity-100" } else { "translate-x-full opacity-0" }
        )}>
            <div class={classes!(
                "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border", "text-white", "min-w-80", "max-w-md",
                props.toast.toast_type.classes()
            )}>
                <span class="text-lg font-bold mr-3">{props.toast.toast_type.icon()}</span>
                <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
                <button onclick={on_close} class="ml-3 text-gray-400 hover:text-white transition-colors duration-200">
                    <span class="text-lg">{"×"}</span>
                </button>
            </div>
        </div>
    }
}

/// Toast dispatcher for the current component tree.
#[hook]
pub fn use_toast() -> Callback<Toast> {
    use_context::<ToastContext>()
        .expect("Toast context not found")
        .add_toast
}
