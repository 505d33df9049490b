use log::debug;
use shared::forms::login::LoginForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    ("Lightning Fast", "Instant access to tournaments"),
    ("Secure & Safe", "Your data is protected"),
    ("Win Big", "Compete for amazing prizes"),
];

#[derive(Properties, PartialEq)]
pub struct SignInFormProps {
    #[prop_or(AttrValue::Static("Welcome Back!"))]
    pub heading: AttrValue,
    #[prop_or(AttrValue::Static("Sign in to continue your journey"))]
    pub subheading: AttrValue,
    #[prop_or(AttrValue::Static("you@example.com"))]
    pub email_placeholder: AttrValue,
}

/// Email and password form wired to the auth context.
///
/// Navigation after success is left to the route guard, which sends the
/// visitor back to where they came from.
#[function_component(SignInForm)]
pub fn sign_in_form(props: &SignInFormProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let form = use_state(LoginForm::default);
    let local_error = use_state(|| None::<String>);
    let show_password = use_state(|| false);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm { email: input.value(), ..(*form).clone() });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm { password: input.value(), ..(*form).clone() });
        })
    };
    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let onsubmit = {
        let form = form.clone();
        let local_error = local_error.clone();
        let auth = auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if auth.state.loading {
                return;
            }
            match form.to_request() {
                Ok(request) => {
                    debug!("Submitting login for {}", request.email);
                    local_error.set(None);
                    auth.login.emit(request);
                }
                Err(message) => {
                    auth.clear_error.emit(());
                    local_error.set(Some(message));
                }
            }
        })
    };

    let loading = auth.state.loading;
    let banner = (*local_error).clone().or_else(|| auth.state.error.clone());

    html! {
        <div class="w-full max-w-md bg-slate-900/80 border border-orange-500/20 rounded-3xl p-8 shadow-2xl">
            <h2 class="text-3xl font-black text-white mb-1">{ &props.heading }</h2>
            <p class="text-slate-400 mb-6">{ &props.subheading }</p>
            if let Some(message) = banner {
                <div class="mb-4 p-3 rounded-xl bg-red-500/20 border border-red-500 text-red-300 text-sm" role="alert">
                    { message }
                </div>
            }
            <form {onsubmit} class="space-y-5" novalidate=true>
                <div class="space-y-1">
                    <label for="email" class="block text-sm font-medium text-gray-300">{"Email"}</label>
                    <input id="email" type="email" value={form.email.clone()} oninput={on_email}
                        placeholder={props.email_placeholder.clone()} disabled={loading} autocomplete="email"
                        class="w-full px-4 py-3 bg-slate-800/60 border border-slate-700 rounded-xl text-white focus:outline-none focus:border-orange-500" />
                </div>
                <div class="space-y-1">
                    <label for="password" class="block text-sm font-medium text-gray-300">{"Password"}</label>
                    <div class="relative">
                        <input id="password" type={if *show_password { "text" } else { "password" }}
                            value={form.password.clone()} oninput={on_password} placeholder="••••••••"
                            disabled={loading} autocomplete="current-password"
                            class="w-full px-4 py-3 pr-16 bg-slate-800/60 border border-slate-700 rounded-xl text-white focus:outline-none focus:border-orange-500" />
                        <button type="button" onclick={toggle_password}
                            class="absolute right-3 top-1/2 -translate-y-1/2 text-xs text-slate-400 hover:text-white">
                            { if *show_password { "Hide" } else { "Show" } }
                        </button>
                    </div>
                </div>
                <button type="submit" disabled={loading}
                    class="w-full py-3 rounded-xl bg-gradient-to-r from-orange-500 to-red-600 text-white font-bold disabled:opacity-60">
                    { if loading { "Signing in..." } else { "Sign In" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <div class="min-h-screen bg-slate-950 flex items-center justify-center px-4 py-12">
            <div class="max-w-5xl w-full grid lg:grid-cols-2 gap-12 items-center">
                <div class="hidden lg:block text-white space-y-8">
                    <Link<Route> to={Route::Home} classes={classes!("text-4xl", "font-black", "bg-gradient-to-r", "from-red-500", "via-orange-500", "to-yellow-500", "bg-clip-text", "text-transparent")}>
                        {"Sports Arena"}
                    </Link<Route>>
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <div>
                            <p class="font-bold text-lg">{ *title }</p>
                            <p class="text-slate-400">{ *text }</p>
                        </div>
                    }) }
                </div>
                <div class="flex flex-col items-center gap-6">
                    <SignInForm />
                    <p class="text-slate-400 text-sm">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::SignUp} classes={classes!("text-orange-400", "font-semibold", "hover:underline")}>
                            {"Sign up"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
