// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed host for LinearIndicator; repaints only when the widget asks, via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use indicator_core::{Host, LinearIndicator, Orientation};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Forwards the widget's redraw requests to the window.
struct WindowHost {
    window: Rc<Window>,
}

impl Host for WindowHost {
    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

const BORDER_STEPS: [f32; 4] = [0.0, 1.0, 2.0, 4.0];

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Linear Indicator — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(
            indicator_core::types::WIDTH as f64,
            indicator_core::types::HEIGHT as f64,
        ))
        .build(&event_loop)?;
    let window = Rc::new(window);

    let context = unsafe { softbuffer::Context::new(&*window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &*window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut widget = LinearIndicator::new(WindowHost { window: Rc::clone(&window) });
    let size = window.inner_size();
    widget.resize(size.width as i32, size.height as i32);
    let mut border_step = 1usize;

    println!("Left/Right: value  Up/Down: offset  V: orientation  B: border width  Esc: quit");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    widget.resize(new_size.width as i32, new_size.height as i32);
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    VirtualKeyCode::Left => widget.set_value(widget.value() - 5),
                    VirtualKeyCode::Right => widget.set_value(widget.value() + 5),
                    VirtualKeyCode::Down => widget.set_offset(widget.offset() - 5),
                    VirtualKeyCode::Up => widget.set_offset(widget.offset() + 5),
                    VirtualKeyCode::V => {
                        let next: Orientation = widget.orientation().toggled();
                        widget.set_orientation(next);
                    }
                    VirtualKeyCode::B => {
                        border_step = (border_step + 1) % BORDER_STEPS.len();
                        widget.set_border_width(BORDER_STEPS[border_step]);
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&widget, &mut surface) {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

fn present(widget: &LinearIndicator<WindowHost>, surface: &mut softbuffer::Surface) -> Result<()> {
    let (w, h) = widget.size();
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w.max(0) as u32), NonZeroU32::new(h.max(0) as u32)) else {
        // Minimised: nothing to show.
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;

    let img = widget.paint()?;
    log::debug!(
        "paint value={} offset={} {:?}",
        widget.value(),
        widget.offset(),
        widget.orientation()
    );
    let argb = img.to_argb32();
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    let n = frame.len().min(argb.len());
    frame[..n].copy_from_slice(&argb[..n]);
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
