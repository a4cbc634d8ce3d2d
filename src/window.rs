use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::input::{InputEvent, Key, PointerButton, ScrollDirection};

/// Sleeps a fixed delay at the end of every frame.
pub struct FrameLimiter {
    delay: Duration,
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, delay: Duration) -> Self {
        Self {
            delay,
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Sleeps the frame delay and returns the milliseconds elapsed since the
    /// previous call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        std::thread::sleep(self.delay);
        let current_time = window.timer().ticks64();
        let delta_time = current_time.saturating_sub(self.previous_frame_time);
        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is boxed and owned by Window. The texture
        // field is declared before it, so it is dropped first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        log::info!("opened {width}x{height} window \"{title}\"");

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending SDL events, translated into [`InputEvent`]s in arrival
    /// order. Events the viewer has no use for are dropped.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(translate_event)
            .collect()
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

fn translate_event(event: Event) -> Option<InputEvent> {
    let input = match event {
        Event::Quit { .. } => InputEvent::Quit,
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => InputEvent::KeyDown(translate_key(keycode)),
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => InputEvent::PointerDown {
            button: translate_button(mouse_btn),
            x,
            y,
        },
        Event::MouseButtonUp { mouse_btn, .. } => InputEvent::PointerUp {
            button: translate_button(mouse_btn),
        },
        Event::MouseMotion { x, y, .. } => InputEvent::PointerMove { x, y },
        Event::MouseWheel { y, .. } if y > 0 => InputEvent::Scroll(ScrollDirection::Up),
        Event::MouseWheel { y, .. } if y < 0 => InputEvent::Scroll(ScrollDirection::Down),
        Event::Window {
            win_event: sdl2::event::WindowEvent::Resized(w, h),
            ..
        } if w > 0 && h > 0 => InputEvent::Resize {
            width: w as u32,
            height: h as u32,
        },
        _ => return None,
    };
    Some(input)
}

fn translate_key(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

fn translate_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Right,
        _ => PointerButton::Other,
    }
}
