use maud::{html, Markup, DOCTYPE};

const MAPBOX_GL_VERSION: &str = "v3.9.4";

/// Full-viewport page shell that pulls Mapbox GL JS from its CDN.
pub fn map_layout(title: &str, content: Markup) -> Markup {
    let cdn = format!("https://api.mapbox.com/mapbox-gl-js/{MAPBOX_GL_VERSION}");
    let stylesheet = format!("{cdn}/mapbox-gl.css");
    let script = format!("{cdn}/mapbox-gl.js");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
                script src=(script) {}
                style {
                    "html, body { margin: 0; padding: 0; height: 100%; }"
                    "#app, #map { position: absolute; inset: 0; }"
                }
            }
            body {
                div id="app" {
                    (content)
                }
            }
        }
    }
}
