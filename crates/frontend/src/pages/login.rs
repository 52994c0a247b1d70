use leptos::prelude::*;

use crate::state::{seed, use_app, AppView};

/// Password gate in front of the admin panel. A static client-side check,
/// not a security boundary; the tool is single-user.
#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app();
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password.get() == seed::ADMIN_PASSWORD {
            ctx.logged_in.set(true);
            ctx.show_login.set(false);
            ctx.view.set(AppView::Admin);
        } else {
            log::warn!("rejected admin login attempt");
            set_error.set(Some("Incorrect password.".to_string()));
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| ctx.show_login.set(false)>
            <div class="modal" on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <h2>"Admin Access"</h2>

                <Show when=move || error.get().is_some()>
                    <div class="form-feedback form-feedback--error">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <label for="admin-password">"Password"</label>
                    <input
                        type="password"
                        id="admin-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <div class="modal__actions">
                        <button type="button" class="btn" on:click=move |_| ctx.show_login.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">"Sign In"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
