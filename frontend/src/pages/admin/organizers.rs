use log::{error, info};
use shared::{LoadState, Organizer, OrganizerStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::organizers;
use crate::components::common_toast::{use_toast, Toast};
use crate::components::data_table::{DataTable, TableRow};
use crate::guard::Loading;
use crate::PanelRoute;

impl TableRow for Organizer {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn matches(&self, term: &str) -> bool {
        Organizer::matches(self, term)
    }
}

const HEADERS: [&str; 7] = ["Name", "Email", "Phone", "Events", "Status", "Join Date", "Actions"];

/// Roster after the server accepted a status change for `id`.
pub fn with_status(list: &[Organizer], id: &str, status: OrganizerStatus) -> Vec<Organizer> {
    list.iter()
        .cloned()
        .map(|mut o| {
            if o.id == id {
                o.status = status;
            }
            o
        })
        .collect()
}

/// Roster after the server deleted `id`.
pub fn without(list: &[Organizer], id: &str) -> Vec<Organizer> {
    list.iter().filter(|o| o.id != id).cloned().collect()
}

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("Are you sure you want to delete {}?", name))
                .ok()
        })
        .unwrap_or(false)
}

#[function_component(Organizers)]
pub fn organizers_page() -> Html {
    let navigator = use_navigator().expect("Organizers rendered outside a router");
    let toast = use_toast();
    let roster = use_state(LoadState::<Vec<Organizer>>::default);

    {
        let roster = roster.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = organizers::list().await;
                if let Err(e) = &result {
                    error!("Failed to load organizers: {}", e);
                }
                roster.set(LoadState::from_result(result.map_err(|e| e.user_message())));
            });
            || ()
        });
    }

    let on_toggle = {
        let roster = roster.clone();
        let toast = toast.clone();
        Callback::from(move |organizer: Organizer| {
            let roster = roster.clone();
            let toast = toast.clone();
            let status = organizer.status.toggled();
            spawn_local(async move {
                match organizers::set_status(&organizer.id, status).await {
                    Ok(()) => {
                        info!("Organizer {} is now {}", organizer.id, status.label());
                        if let Some(list) = roster.data() {
                            roster.set(LoadState::Loaded(with_status(list, &organizer.id, status)));
                        }
                        toast.emit(Toast::success(format!("{} is now {}", organizer.name, status.label())));
                    }
                    Err(e) => {
                        error!("Failed to update organizer status: {}", e);
                        toast.emit(Toast::error(e.user_message()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let roster = roster.clone();
        let toast = toast.clone();
        Callback::from(move |organizer: Organizer| {
            if !confirm_delete(&organizer.name) {
                return;
            }
            let roster = roster.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match organizers::delete(&organizer.id).await {
                    Ok(()) => {
                        if let Some(list) = roster.data() {
                            roster.set(LoadState::Loaded(without(list, &organizer.id)));
                        }
                        toast.emit(Toast::success("Organizor deleted successfully"));
                    }
                    Err(e) => {
                        error!("Failed to delete organizer: {}", e);
                        toast.emit(Toast::error(e.user_message()));
                    }
                }
            });
        })
    };

    let render_row = Callback::from(move |o: Organizer| {
        let toggle = {
            let on_toggle = on_toggle.clone();
            let o = o.clone();
            Callback::from(move |_: MouseEvent| on_toggle.emit(o.clone()))
        };
        let remove = {
            let on_delete = on_delete.clone();
            let o = o.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(o.clone()))
        };
        let status_classes = if o.is_active() {
            "bg-green-500/20 text-green-400 border-green-500/30"
        } else {
            "bg-red-500/20 text-red-400 border-red-500/30"
        };
        vec![
            html! {
                <div class="flex items-center gap-3">
                    <span class="w-9 h-9 rounded-full bg-gradient-to-r from-orange-500 to-red-500 flex items-center justify-center font-bold">
                        { o.initial().to_string() }
                    </span>
                    <span class="font-medium">{ &o.name }</span>
                </div>
            },
            html! { { &o.email } },
            html! { { &o.contact } },
            html! { { o.events } },
            html! {
                <button onclick={toggle} title="Toggle status"
                    class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-semibold", "border", status_classes)}>
                    { o.status.label() }
                </button>
            },
            html! { { o.join_date.clone().unwrap_or_else(|| "-".to_string()) } },
            html! {
                <button onclick={remove} class="text-red-400 hover:text-red-300 text-sm font-medium">{"Delete"}</button>
            },
        ]
    });

    let on_add = Callback::from(move |_: MouseEvent| navigator.push(&PanelRoute::AddOrganizer));

    html! {
        <div>
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-3xl font-bold">{"Organizors Management"}</h1>
                    <p class="text-gray-400 mt-1">{"Manage and monitor event organizors"}</p>
                </div>
                <button onclick={on_add}
                    class="px-6 py-3 rounded-xl font-semibold bg-gradient-to-r from-orange-500 to-red-500 hover:shadow-lg hover:shadow-orange-500/30">
                    {"+ Add Organizor"}
                </button>
            </div>
            {
                match &*roster {
                    LoadState::Loading => html! { <Loading message="Loading organizors..." /> },
                    LoadState::Failed(message) => html! {
                        <div class="p-6 rounded-2xl bg-red-500/10 border border-red-500/30 text-red-300">{ message }</div>
                    },
                    LoadState::Loaded(list) => html! {
                        <DataTable<Organizer>
                            headers={HEADERS.iter().map(|h| AttrValue::from(*h)).collect::<Vec<_>>()}
                            rows={list.clone()}
                            {render_row}
                            placeholder="Search organizors..."
                        />
                    },
                }
            }
        </div>
    }
}
