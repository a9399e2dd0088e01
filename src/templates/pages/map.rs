// templates/pages/map.rs

use crate::config::MapConfig;
use crate::templates::map_layout;
use maud::{html, Markup, PreEscaped};
use serde_json::{json, Value};

pub const MAP_STYLE: &str = "mapbox://styles/mapbox/dark-v11";
pub const INITIAL_CENTER: [f64; 2] = [-118.32010468759735, 34.025238141009766];
pub const INITIAL_ZOOM: f64 = 9.5;

pub const SOURCE_ID: &str = "listings";
pub const LAYER_ID: &str = "listing_points";

// Reads the settings blob, then wires up source, layer, popups and controls.
const MAP_SCRIPT: &str = r#"
const settings = JSON.parse(document.getElementById('map-settings').textContent);
mapboxgl.accessToken = settings.accessToken;

const map = new mapboxgl.Map({
  container: 'map',
  style: settings.style,
  center: settings.center,
  zoom: settings.zoom,
});

map.on('load', () => {
  map.addSource(settings.sourceId, { type: 'geojson', data: settings.dataUrl });
  map.addLayer(settings.layer);

  map.on('click', settings.layer.id, (e) => {
    const html = e.features?.[0]?.properties?.popup_html;
    if (!html) return;
    new mapboxgl.Popup().setLngLat(e.lngLat).setHTML(html).addTo(map);
  });
  map.on('mouseenter', settings.layer.id, () => {
    map.getCanvas().style.cursor = 'pointer';
  });
  map.on('mouseleave', settings.layer.id, () => {
    map.getCanvas().style.cursor = '';
  });
});

map.addControl(new mapboxgl.NavigationControl({ showCompass: false }), 'bottom-left');
"#;

/// Circle layer for the listing points.
pub fn listing_layer() -> Value {
    json!({
        "id": LAYER_ID,
        "type": "circle",
        "source": SOURCE_ID,
        "layout": {},
        "paint": {
            "circle-color": "#f94b4b",
            "circle-radius": ["interpolate", ["linear"], ["zoom"], 1, 1, 30, 12],
            "circle-stroke-color": "#434344",
            "circle-stroke-width": ["interpolate", ["linear"], ["zoom"], 10, 1, 14, 1]
        }
    })
}

pub fn map_settings(config: &MapConfig) -> Value {
    json!({
        "accessToken": config.access_token,
        "dataUrl": config.data_url,
        "style": MAP_STYLE,
        "center": INITIAL_CENTER,
        "zoom": INITIAL_ZOOM,
        "sourceId": SOURCE_ID,
        "layer": listing_layer(),
    })
}

pub fn map_page(config: &MapConfig) -> Markup {
    // JSON inside a script element must not close the element early.
    let settings = map_settings(config).to_string().replace("</", "<\\/");

    map_layout(
        "Rent Gouging Map",
        html! {
            div id="map" {}
            script id="map-settings" type="application/json" { (PreEscaped(settings)) }
            script { (PreEscaped(MAP_SCRIPT)) }
        },
    )
}
