//! Map surface: scrollable, zoomable city map with point markers.
//!
//! Panning is native scrolling over a scaled wrapper; zooming applies a
//! CSS transform to the surface, so markers get their apparent size held
//! constant via the inverse-scale helper. Clicks on empty surface are
//! translated to normalized percentages before they leave this component.

use ecomap_core::{MAX_SCALE, MIN_SCALE, Mode, Point, PointId, Viewport};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::PointMarker;

/// Intrinsic (unscaled) pixel size of the city map image.
pub const MAP_INTRINSIC_WIDTH: f64 = 1600.0;
pub const MAP_INTRINSIC_HEIGHT: f64 = 1200.0;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    /// Points surviving the category filter.
    pub points: Vec<Point>,
    pub mode: Mode,
    pub selected: Option<PointId>,
    pub on_marker_click: Callback<PointId>,
    /// Click on empty surface, already normalized to percentages.
    pub on_map_click: Callback<(f64, f64)>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let viewport = use_state(Viewport::default);
    let scroll_ref = use_node_ref();
    let surface_ref = use_node_ref();

    let on_zoom_in = {
        let viewport = viewport.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *viewport;
            next.zoom_in();
            viewport.set(next);
        })
    };

    let on_zoom_out = {
        let viewport = viewport.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *viewport;
            next.zoom_out();
            viewport.set(next);
        })
    };

    let on_zoom_reset = {
        let viewport = viewport.clone();
        let scroll_ref = scroll_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *viewport;
            next.reset();
            viewport.set(next);
            // Recenter the scroll viewport on the image midpoint.
            if let Some(container) = scroll_ref.cast::<HtmlElement>() {
                let x = (MAP_INTRINSIC_WIDTH - f64::from(container.client_width())) / 2.0;
                let y = (MAP_INTRINSIC_HEIGHT - f64::from(container.client_height())) / 2.0;
                container.scroll_to_with_x_and_y(x.max(0.0), y.max(0.0));
            }
        })
    };

    let on_surface_click = {
        let viewport = viewport.clone();
        let surface_ref = surface_ref.clone();
        let on_map_click = props.on_map_click.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(surface) = surface_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = surface.get_bounding_client_rect();
            let percent = viewport.to_percent(
                (f64::from(e.client_x()), f64::from(e.client_y())),
                (rect.left(), rect.top()),
                (MAP_INTRINSIC_WIDTH, MAP_INTRINSIC_HEIGHT),
            );
            on_map_click.emit(percent);
        })
    };

    let placing = matches!(props.mode, Mode::AddingNewPoint | Mode::RelocatingPoint);

    let surface_style = format!(
        "width: {MAP_INTRINSIC_WIDTH}px; height: {MAP_INTRINSIC_HEIGHT}px; \
         transform: scale({}); transform-origin: 0 0;",
        viewport.scale
    );
    // The scroll container needs the scaled footprint to scroll over.
    let spacer_style = format!(
        "width: {}px; height: {}px;",
        MAP_INTRINSIC_WIDTH * viewport.scale,
        MAP_INTRINSIC_HEIGHT * viewport.scale
    );

    html! {
        <div class="map-scroll" ref={scroll_ref.clone()}>
            <div class="map-spacer" style={spacer_style}>
                <div
                    class={classes!("map-surface", placing.then_some("placing"))}
                    style={surface_style}
                    ref={surface_ref.clone()}
                    onclick={on_surface_click}
                >
                    <img
                        class="map-image"
                        src="/assets/city-map.png"
                        alt="City map"
                        draggable="false"
                    />
                    { for props.points.iter().map(|point| html! {
                        <PointMarker
                            key={point.id.to_string()}
                            point={point.clone()}
                            viewport={*viewport}
                            selected={props.selected.as_ref() == Some(&point.id)}
                            onclick={props.on_marker_click.clone()}
                        />
                    })}
                </div>
            </div>
            <div class="map-zoom-controls">
                <button onclick={on_zoom_in} disabled={viewport.scale >= MAX_SCALE}>{ "+" }</button>
                <button onclick={on_zoom_out} disabled={viewport.scale <= MIN_SCALE}>{ "−" }</button>
                <button onclick={on_zoom_reset}>{ "reset" }</button>
            </div>
        </div>
    }
}
