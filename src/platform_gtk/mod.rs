//! GTK4 embedding: a `DrawingArea` wired to a [`ScatterChart`].

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ScatterChart;
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, Renderer};

/// Owns the drawing area and the chart it displays.
///
/// Clicks select axis labels, motion drives the tooltip, and a frame-clock
/// tick callback advances transitions while any are in flight.
pub struct GtkScatterAdapter<R: Renderer + CairoContextRenderer + 'static> {
    drawing_area: gtk::DrawingArea,
    engine: Rc<RefCell<ScatterChart<R>>>,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkScatterAdapter<R> {
    #[must_use]
    pub fn new(engine: ScatterChart<R>) -> Self {
        let geometry = engine.geometry();
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(geometry.canvas.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(geometry.canvas.height).unwrap_or(i32::MAX));
        let engine = Rc::new(RefCell::new(engine));

        {
            let engine = Rc::clone(&engine);
            drawing_area.set_draw_func(move |_, context, _, _| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    if let Err(err) = chart.render_on_cairo_context(context) {
                        warn!(error = %err, "scatter chart draw failed");
                    }
                }
            });
        }

        let click = gtk::GestureClick::new();
        {
            let engine = Rc::clone(&engine);
            let drawing_area = drawing_area.clone();
            click.connect_pressed(move |_, _, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    if let Err(err) = chart.pointer_click(x, y) {
                        warn!(error = %err, "label click rejected");
                    }
                }
                drawing_area.queue_draw();
            });
        }
        drawing_area.add_controller(click);

        let motion = gtk::EventControllerMotion::new();
        {
            let engine = Rc::clone(&engine);
            let drawing_area = drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    if let Err(err) = chart.pointer_move(x, y) {
                        warn!(error = %err, "pointer move rejected");
                    }
                }
                drawing_area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&engine);
            let drawing_area = drawing_area.clone();
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_leave();
                }
                drawing_area.queue_draw();
            });
        }
        drawing_area.add_controller(motion);

        {
            let engine = Rc::clone(&engine);
            let start_us = Rc::new(RefCell::new(None::<i64>));
            drawing_area.add_tick_callback(move |area, clock| {
                let frame_us = clock.frame_time();
                let origin = *start_us.borrow_mut().get_or_insert(frame_us);
                let now_ms = (frame_us - origin) as f64 / 1000.0;
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    let was_animating = chart.is_animating();
                    match chart.tick(now_ms) {
                        Ok(animating) if animating || was_animating => area.queue_draw(),
                        Ok(_) => {}
                        Err(err) => warn!(error = %err, "clock tick rejected"),
                    }
                }
                gtk::glib::ControlFlow::Continue
            });
        }

        Self {
            drawing_area,
            engine,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<ScatterChart<R>>> {
        Rc::clone(&self.engine)
    }

    /// Runs `update` against the chart and schedules a redraw.
    pub fn update_engine(
        &self,
        update: impl FnOnce(&mut ScatterChart<R>) -> ChartResult<()>,
    ) -> ChartResult<()> {
        update(&mut self.engine.borrow_mut())?;
        self.drawing_area.queue_draw();
        Ok(())
    }
}
