use leptos::prelude::*;

/// Static mock of the desktop app's dashboard shown under the hero
#[component]
pub fn AppPreview() -> impl IntoView {
    view! {
        <div class="w-full max-w-4xl mx-auto mt-16 rounded-xl overflow-hidden shadow-2xl shadow-blue-500/10 border border-slate-700 bg-[#0f0f12] text-sm relative z-10 text-left">
            // Window Header (OS Chrome)
            <div class="bg-slate-800 px-4 py-2 flex items-center space-x-2 border-b border-slate-700">
                <div class="w-3 h-3 rounded-full bg-red-500/80"></div>
                <div class="w-3 h-3 rounded-full bg-yellow-500/80"></div>
                <div class="w-3 h-3 rounded-full bg-green-500/80"></div>
                <div class="flex-1 text-center text-slate-400 text-xs">"InboxHunter"</div>
            </div>

            <div class="flex h-80 text-slate-300">
                // Sidebar
                <div class="w-40 border-r border-slate-800 p-3 space-y-1 hidden sm:block">
                    <SidebarItem label="Dashboard" active=true />
                    <SidebarItem label="Settings" active=false />
                    <SidebarItem label="Logs" active=false />
                </div>

                // Main Content
                <div class="flex-1 p-5 space-y-5">
                    <div class="flex items-center justify-between">
                        <h3 class="font-semibold text-white">"Dashboard"</h3>
                        <div class="flex items-center gap-2 text-xs text-emerald-400">
                            <span class="w-2 h-2 rounded-full bg-emerald-400 animate-pulse"></span>
                            "Running"
                        </div>
                    </div>

                    <div class="grid grid-cols-3 gap-3">
                        <StatTile value="47" label="Processed" class="p-3 rounded-lg bg-blue-500/10 border border-blue-500/20 text-blue-400" />
                        <StatTile value="45" label="Successful" class="p-3 rounded-lg bg-emerald-500/10 border border-emerald-500/20 text-emerald-400" />
                        <StatTile value="96%" label="Success Rate" class="p-3 rounded-lg bg-purple-500/10 border border-purple-500/20 text-purple-400" />
                    </div>

                    <div class="rounded-lg bg-slate-900/60 border border-slate-800 p-3 font-mono text-xs space-y-1">
                        <div class="text-slate-500 mb-2">"Recent Activity"</div>
                        <div>"\u{2705} Signed up: marketing-pro.com"</div>
                        <div>"\u{2705} Signed up: leadgen-experts.io"</div>
                        <div class="text-slate-400">"\u{1F504} Processing: funnel-masters.com"</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SidebarItem(label: &'static str, active: bool) -> impl IntoView {
    let class = if active {
        "px-3 py-2 rounded-lg text-xs bg-blue-500/20 text-blue-300"
    } else {
        "px-3 py-2 rounded-lg text-xs text-slate-500"
    };

    view! { <div class=class>{label}</div> }
}

#[component]
fn StatTile(value: &'static str, label: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            <div class="text-xl font-bold">{value}</div>
            <div class="text-[11px] text-slate-500">{label}</div>
        </div>
    }
}
