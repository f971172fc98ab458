use anyhow::Result;
use canonical_input::input::keys::KEY_ESCAPE;
use canonical_input::input::{
    CaptureConfig, Correlator, EventKind, EventQueue, NotificationQueue, RawNotification,
    WinitCursorWarp, WinitEventAdapter, WinitWindowHost,
};
use log::{debug, info};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting canonical input capture...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Canonical Input")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let config = CaptureConfig::default();
    let (sender, mut notifications) = NotificationQueue::new();
    let mut adapter = WinitEventAdapter::new();
    let mut correlator = Correlator::new(
        WinitWindowHost::new(Arc::clone(&window)),
        WinitCursorWarp::boxed(Arc::clone(&window)),
        EventQueue::new(config.queue_capacity),
        config,
    );

    // Attach capture before the first frame
    sender.send(RawNotification::WindowCreated)?;

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent { event, .. } => {
                adapter.forward(&event, &sender);
            }
            Event::AboutToWait => {
                correlator.process_events(&mut notifications);

                if correlator.take_just_focused() {
                    debug!("Window regained focus");
                }

                for event in correlator.sink().drain() {
                    debug!("{:?}", event);
                    if event.kind == EventKind::KeyDown && event.data1 == KEY_ESCAPE {
                        info!("Escape pressed, shutting down...");
                        elwt.exit();
                    }
                }
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
