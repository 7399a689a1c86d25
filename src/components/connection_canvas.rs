use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::Connection;

#[derive(Properties, PartialEq, Clone)]
pub struct ConnectionCanvasProps {
    pub connections: Vec<Connection>,
}

/// Full-window overlay that redraws every connection each animation frame,
/// anchored to the on-screen position of the nodes' connector dots.
#[function_component(ConnectionCanvas)]
pub fn connection_canvas(props: &ConnectionCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let connections_ref = use_mut_ref(Vec::<Connection>::new);

    // Keep the frame loop reading the latest connections
    {
        let connections_ref = connections_ref.clone();
        let connections = props.connections.clone();
        use_effect_with(connections, move |connections| {
            *connections_ref.borrow_mut() = connections.clone();
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            if let (Some(win), Some(canvas)) = (window.clone(), canvas_ref.cast::<HtmlCanvasElement>()) {
                let frame_cb_loop = frame_cb.clone();
                let raf_id_loop = raf_id.clone();
                let win_loop = win.clone();
                *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    draw(&win_loop, &canvas, &connections_ref.borrow());
                    if let Some(cb) = frame_cb_loop.borrow().as_ref() {
                        if let Ok(id) = win_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_loop.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
                if let Some(cb) = frame_cb.borrow().as_ref() {
                    if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }
            move || {
                if let (Some(win), Some(id)) = (window, *raf_id.borrow()) {
                    let _ = win.cancel_animation_frame(id);
                }
                // Break the closure's self-reference so it can be freed
                frame_cb.borrow_mut().take();
            }
        });
    }

    html! { <canvas ref={canvas_ref} class="connections" aria-hidden="true"></canvas> }
}

fn draw(window: &web_sys::Window, canvas: &HtmlCanvasElement, connections: &[Connection]) {
    if !canvas.is_connected() {
        return;
    }
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
    if canvas.width() != width as u32 || canvas.height() != height as u32 {
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
    }
    ctx.clear_rect(0.0, 0.0, width, height);

    let Some(document) = window.document() else {
        return;
    };
    let center = |id: String| {
        document.get_element_by_id(&id).map(|el| {
            let r = el.get_bounding_client_rect();
            (r.left() + r.width() / 2.0, r.top() + r.height() / 2.0)
        })
    };
    for conn in connections {
        let (Some((x1, y1)), Some((x2, y2))) = (center(conn.from.dot_dom_id()), center(conn.to.dot_dom_id())) else {
            continue;
        };
        ctx.begin_path();
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        // Neon glow
        ctx.set_shadow_blur(15.0);
        ctx.set_shadow_color(conn.color);
        ctx.set_stroke_style_str(conn.color);
        ctx.set_line_width(3.0);
        ctx.set_line_cap("round");
        ctx.stroke();
        ctx.set_shadow_blur(0.0);
    }
}
