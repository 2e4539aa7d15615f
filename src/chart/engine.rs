use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, warn};

use crate::chart::builder::build_surface;
use crate::chart::mesh::SurfaceChartMesh;

pub enum ChartCommand {
    BuildSurface {
        x: Vec<f32>,
        y: Vec<f32>,
        z: Vec<f32>,
        double_sided: bool,
    },
    Stop,
}

pub enum ChartResult {
    Surface(SurfaceChartMesh),
    Error(String),
}

#[derive(Default)]
pub struct ChartStats {
    pub build_time_ms: Mutex<f32>,
    pub vertex_count: AtomicUsize,
    pub triangle_count: AtomicUsize,
    pub z_range: Mutex<(f32, f32)>,
    pub fps: Mutex<f32>,
}

pub struct ChartEngine {
    tx_cmd: Sender<ChartCommand>,
    rx_result: Receiver<ChartResult>,
    stats: Arc<ChartStats>,
    last_error: Arc<Mutex<Option<String>>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl ChartEngine {
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = channel::unbounded::<ChartCommand>();
        let (tx_result, rx_result) = channel::bounded::<ChartResult>(2);
        let stats = Arc::new(ChartStats::default());
        let last_error = Arc::new(Mutex::new(None));

        let stats_clone = Arc::clone(&stats);
        let last_error_clone = Arc::clone(&last_error);

        let thread_handle = thread::spawn(move || {
            chart_thread(rx_cmd, tx_result, stats_clone, last_error_clone);
        });

        Self {
            tx_cmd,
            rx_result,
            stats,
            last_error,
            thread_handle: Some(thread_handle),
        }
    }

    pub fn build_surface(&self, x: Vec<f32>, y: Vec<f32>, z: Vec<f32>, double_sided: bool) {
        let _ = self.tx_cmd.send(ChartCommand::BuildSurface {
            x,
            y,
            z,
            double_sided,
        });
    }

    pub fn try_recv_result(&self) -> Option<ChartResult> {
        self.rx_result.try_recv().ok()
    }

    pub fn stats(&self) -> &Arc<ChartStats> {
        &self.stats
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub fn stop(&self) {
        let _ = self.tx_cmd.send(ChartCommand::Stop);
    }
}

impl Drop for ChartEngine {
    fn drop(&mut self) {
        let _ = self.tx_cmd.send(ChartCommand::Stop);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

fn chart_thread(
    rx_cmd: Receiver<ChartCommand>,
    tx_result: Sender<ChartResult>,
    stats: Arc<ChartStats>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    loop {
        let cmd = match rx_cmd.recv() {
            Ok(c) => c,
            Err(_) => return,
        };

        match cmd {
            ChartCommand::BuildSurface {
                x,
                y,
                z,
                double_sided,
            } => {
                *last_error.lock() = None;

                let start = Instant::now();
                match build_surface(&x, &y, &z, double_sided) {
                    Ok(mesh) => {
                        let elapsed_ms = start.elapsed().as_secs_f32() * 1000.0;
                        *stats.build_time_ms.lock() = elapsed_ms;
                        stats
                            .vertex_count
                            .store(mesh.vertex_count(), Ordering::Relaxed);
                        stats
                            .triangle_count
                            .store(mesh.triangle_count(), Ordering::Relaxed);
                        *stats.z_range.lock() = (mesh.z_min, mesh.z_max);
                        debug!(
                            vertices = mesh.vertex_count(),
                            elapsed_ms, "surface build finished"
                        );
                        let _ = tx_result.send(ChartResult::Surface(mesh));
                    }
                    Err(e) => {
                        warn!(error = %e, "surface build failed");
                        let msg = e.to_string();
                        *last_error.lock() = Some(msg.clone());
                        let _ = tx_result.send(ChartResult::Error(msg));
                    }
                }
            }
            ChartCommand::Stop => return,
        }
    }
}
