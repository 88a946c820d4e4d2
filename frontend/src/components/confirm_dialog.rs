use crate::components::modal::Modal;
use leptos::*;

/// Yes/no prompt built on the shared [`Modal`] shell. Dismissing the
/// dialog by any means other than the confirm button counts as cancel.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };

    let confirm_text = Signal::derive(move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "Confirm".to_string()
        } else {
            text
        }
    });
    let cancel_text = Signal::derive(move || {
        let text = cancel_label.get();
        if text.trim().is_empty() {
            "Cancel".to_string()
        } else {
            text
        }
    });
    let message_text = Signal::derive(move || message.get());

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| on_cancel.call(())
                >
                    {move || cancel_text.get()}
                </button>
                <button
                    type="button"
                    class=confirm_button_class
                    disabled=move || confirm_disabled.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || confirm_text.get()}
                </button>
            </div>
        </Modal>
    }
}
