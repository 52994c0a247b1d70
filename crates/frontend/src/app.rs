use leptos::prelude::*;

use crate::pages::admin::AdminPanel;
use crate::pages::dashboard::Dashboard;
use crate::pages::login::LoginModal;
use crate::state::{storage, AppContext, AppView};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Write-through persistence: every ledger mutation lands in localStorage.
    Effect::new(move |_| {
        ctx.ledger.with(|ledger| storage::save_ledger(ledger));
    });

    view! {
        <div class="app">
            <Header />
            <main class="app__main">
                <Show when=move || ctx.view.get() == AppView::Dashboard>
                    <Dashboard />
                </Show>
                <Show when=move || ctx.view.get() == AppView::Admin && ctx.logged_in.get()>
                    <AdminPanel />
                </Show>
            </main>
            <Show when=move || ctx.show_login.get()>
                <LoginModal />
            </Show>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ctx = crate::state::use_app();

    let print_page = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <header class="app__header">
            <div class="app__titles">
                <h1>"Sales Dashboard"</h1>
                <p class="app__subtitle">
                    {move || match ctx.view.get() {
                        AppView::Dashboard => "Revenue, goals and seller performance",
                        AppView::Admin => "Manage sales entries and the seller roster",
                    }}
                </p>
            </div>
            <div class="app__controls">
                <button class="btn" on:click=print_page>"Print"</button>
                {move || {
                    match (ctx.logged_in.get(), ctx.view.get()) {
                        (true, AppView::Admin) => {
                            view! {
                                <button
                                    class="btn"
                                    on:click=move |_| ctx.view.set(AppView::Dashboard)
                                >
                                    "Back to Dashboard"
                                </button>
                                <button class="btn" on:click=move |_| ctx.log_out()>
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        }
                        (true, AppView::Dashboard) => {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| ctx.view.set(AppView::Admin)
                                >
                                    "Admin Panel"
                                </button>
                                <button class="btn" on:click=move |_| ctx.log_out()>
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        }
                        (false, _) => {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| ctx.show_login.set(true)
                                >
                                    "Admin Access"
                                </button>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </header>
    }
}
