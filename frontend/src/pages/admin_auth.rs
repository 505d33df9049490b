use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::login::SignInForm;
use crate::Route;

/// Back-office entrance. Admin accounts are provisioned, so the sign-up tab
/// only explains how to get one.
#[function_component(AdminAuth)]
pub fn admin_auth() -> Html {
    let is_login = use_state(|| true);

    let toggle = {
        let is_login = is_login.clone();
        Callback::from(move |_: MouseEvent| is_login.set(!*is_login))
    };

    html! {
        <div class="min-h-screen bg-slate-950 flex flex-col items-center justify-center px-4 gap-6">
            if *is_login {
                <SignInForm heading="Admin Login" subheading="Sign in to manage organizors" email_placeholder="admin@example.com" />
            } else {
                <div class="w-full max-w-md bg-slate-900/80 border border-orange-500/20 rounded-3xl p-8 text-white">
                    <h2 class="text-3xl font-black mb-4">{"Admin Signup"}</h2>
                    <p class="text-slate-400 mb-6">
                        {"Admin accounts are created by existing administrators. Ask an administrator to invite you, or create a player account instead."}
                    </p>
                    <Link<Route> to={Route::SignUp} classes={classes!("block", "text-center", "w-full", "py-3", "rounded-xl", "bg-gradient-to-r", "from-orange-500", "to-red-600", "font-bold")}>
                        {"Create a Player Account"}
                    </Link<Route>>
                </div>
            }
            <p class="text-slate-400 text-sm">
                { if *is_login { "Don't have an account? " } else { "Already have an account? " } }
                <button onclick={toggle} class="text-orange-400 font-semibold hover:underline">
                    { if *is_login { "Sign up" } else { "Login" } }
                </button>
            </p>
        </div>
    }
}
