use leptos::*;

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards so
/// state does not leak between host tests.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let value = f();
    runtime.dispose();
    value
}

/// Renders a component tree to static HTML. Resource loading is suppressed
/// for the duration of the render, so pages come out in their initial
/// (pre-fetch) state regardless of what the API client would return.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(move || view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
