//! Single point marker on the map surface.

use ecomap_core::{Category, Point, PointId, Viewport};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

/// Intrinsic marker size at scale 1.0 and its clamping bounds.
pub const MARKER_BASE_PX: f64 = 36.0;
pub const MARKER_MIN_PX: f64 = 20.0;
pub const MARKER_MAX_PX: f64 = 56.0;

#[derive(Properties, PartialEq)]
pub struct PointMarkerProps {
    pub point: Point,
    pub viewport: Viewport,
    pub selected: bool,
    pub onclick: Callback<PointId>,
}

fn icon_for(token: &str) -> IconData {
    match token {
        "recycle" => IconData::LUCIDE_RECYCLE,
        "newspaper" => IconData::LUCIDE_NEWSPAPER,
        "cpu" => IconData::LUCIDE_CPU,
        "wine" => IconData::LUCIDE_WINE,
        "wrench" => IconData::LUCIDE_WRENCH,
        "leaf" => IconData::LUCIDE_LEAF,
        _ => IconData::LUCIDE_MAP_PIN,
    }
}

/// One visual marker at the point's normalized coordinates. Clicks bubble
/// up with the point's identity and never reach the map surface.
#[function_component(PointMarker)]
pub fn point_marker(props: &PointMarkerProps) -> Html {
    let point = &props.point;
    let size = props
        .viewport
        .screen_size(MARKER_BASE_PX, MARKER_MIN_PX, MARKER_MAX_PX);

    let (color, marker_bg, icon) = Category::find(&point.category)
        .map_or(("#334155", "#e2e8f0", IconData::LUCIDE_MAP_PIN), |c| {
            (c.color, c.marker_bg, icon_for(c.icon))
        });

    let style = format!(
        "left: {}%; top: {}%; width: {size}px; height: {size}px; color: {color}; background: {marker_bg};",
        point.x, point.y
    );

    let onclick = {
        let callback = props.onclick.clone();
        let id = point.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(id.clone());
        })
    };

    let glyph_size = format!("{:.0}", size * 0.6);

    html! {
        <button
            type="button"
            class={classes!("point-marker", props.selected.then_some("selected"))}
            style={style}
            title={point.name.clone()}
            onclick={onclick}
        >
            <Icon data={icon} width={glyph_size.clone()} height={glyph_size} />
        </button>
    }
}
