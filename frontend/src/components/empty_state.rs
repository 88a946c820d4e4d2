use leptos::*;

/// Placeholder shown when a list fetch succeeds but comes back empty.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <svg
                class="mx-auto h-12 w-12 text-fg-muted"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M17 20h5v-2a4 4 0 00-3-3.87M9 20H4v-2a4 4 0 013-3.87m6-1.13a4 4 0 10-4-4 4 4 0 004 4zm6-4a3 3 0 11-3-3"
                />
            </svg>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No employees found"
                    description="Add your first employee to get started."
                />
            }
        });
        assert!(html.contains("No employees found"));
        assert!(html.contains("Add your first employee"));
    }

    #[test]
    fn empty_state_omits_missing_description() {
        let html = render_to_string(move || {
            view! { <EmptyState title="No attendance records" /> }
        });
        assert!(html.contains("No attendance records"));
        assert!(!html.contains("mt-1 text-sm"));
    }
}
