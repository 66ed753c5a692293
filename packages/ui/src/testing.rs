//! Headless driver for component tests.

use std::time::Duration;

use dioxus::prelude::*;

/// Build `dom`, then process its tasks and renders for `duration`.
pub(crate) async fn mount_and_run(dom: &mut VirtualDom, duration: Duration) {
    dom.rebuild_in_place();
    keep_running(dom, duration).await;
}

/// Process tasks, effects and renders of an already built `dom` for `duration`.
pub(crate) async fn keep_running(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = dom.wait_for_work() => {
                let _ = dom.render_immediate_to_vec();
            }
            _ = &mut deadline => break,
        }
    }
}
