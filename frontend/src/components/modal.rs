use leptos::ev::KeyboardEvent;
use leptos::*;

/// Dialog shell shared by the form modals. Backdrop click, the header
/// close button and Escape all invoke `on_close`; the caller decides
/// what closing means (usually resetting its form state).
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] description: Option<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title_text = Signal::derive(move || title.get());
    let body = store_value(children);

    let close_on_backdrop = on_close;
    let close_on_header_button = on_close;
    let close_on_esc = on_close;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| close_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[51] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close_on_esc.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| close_on_header_button.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {description.clone().map(|desc| view! {
                        <p class="text-sm text-fg-muted">{desc}</p>
                    })}
                    {body.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_title_and_children_when_open() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <Modal
                    is_open=is_open
                    title="Add New Employee"
                    description="Enter the details of the new employee."
                    on_close=Callback::new(|_| {})
                >
                    <p>"form body"</p>
                </Modal>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Add New Employee"));
        assert!(html.contains("form body"));
    }

    #[test]
    fn modal_renders_nothing_when_closed() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| false);
            view! {
                <Modal is_open=is_open title="Hidden" on_close=Callback::new(|_| {})>
                    <p>"invisible"</p>
                </Modal>
            }
        });
        assert!(!html.contains("invisible"));
    }
}
