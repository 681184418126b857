use std::panic;
use leptos::logging::log;

/// Chains a hook that logs where a panic happened after the console hook reports it.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        log!("[PANIC] {} at {}", message, location);
        if message.contains("OwnerDisposed") {
            log!("[PANIC] A signal or effect ran after its component was unmounted");
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Call from the hydrate or csr entry point
pub fn init() {
    log!("[PANIC_HOOK] Setting up panic hooks");
    console_error_panic_hook::set_once();
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Panic hooks set up successfully");
}
