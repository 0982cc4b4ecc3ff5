//! Dashboard Component

use leptos::prelude::*;

/// Landing panel with the pre-configured agent installer
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="row">
            <div class="col-md-12">
                <div class="panel panel-default">
                    <div class="panel-body">
                        <h2>"Summit Route | EPP"</h2>
                        <p>
                            <a href="/download/SREPP.exe">
                                <span class="glyphicon glyphicon-download"></span>
                                " Download your agent"
                            </a>
                            " | Your agent installer is pre-configured so the data it collects will show up in your dashboard."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
