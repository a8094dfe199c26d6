use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use ortho_rt::geometry::HitRule;
use ortho_rt::math::Point3;
use ortho_rt::parsing::load_scene;
use ortho_rt::{Renderer, Scene, SphereParams, Viewport};

const EDIT_STEP: f32 = 0.1;

#[derive(Debug, StructOpt)]
#[structopt(name = "ortho_rt", about = "orthographic ray caster with a single point lamp")]
struct Opt {
    /// json scene description, the built in scene is used when omitted
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,

    #[structopt(long, default_value = "800")]
    width: usize,

    #[structopt(long, default_value = "600")]
    height: usize,

    /// defaults to the number of logical cpus
    #[structopt(long)]
    threads: Option<usize>,

    #[structopt(long, parse(from_os_str), default_value = "output/render.png")]
    output: PathBuf,

    /// open an interactive viewer instead of writing a single frame
    #[structopt(long)]
    window: bool,

    /// halve the hit parameter like the legacy viewer did
    #[structopt(long)]
    halve_hit_time: bool,
}

fn edit_subject(window: &Window, params: SphereParams) -> SphereParams {
    let pressed = |key| window.is_key_pressed(key, KeyRepeat::Yes);
    let step = |neg: Key, pos: Key| {
        let mut delta = 0.0;
        if pressed(neg) {
            delta -= EDIT_STEP;
        }
        if pressed(pos) {
            delta += EDIT_STEP;
        }
        delta
    };
    let c = params.center;
    SphereParams {
        center: Point3::new(
            c.x() + step(Key::Left, Key::Right),
            c.y() + step(Key::PageDown, Key::PageUp),
            c.z() + step(Key::Up, Key::Down),
        ),
        radius: params.radius + step(Key::Minus, Key::Equal),
    }
    .clamped()
}

fn run_window(mut scene: Scene, opt: &Opt) -> Result<(), Box<dyn Error>> {
    let mut window = Window::new(
        "ortho_rt",
        opt.width,
        opt.height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(Some(Duration::from_micros(16600)));

    let mut renderer = Renderer::new();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        if let Some(subject) = scene.subject() {
            let edited = edit_subject(&window, subject);
            if edited != subject {
                tracing::debug!("subject sphere now {:?}", edited);
                scene.apply(edited);
            }
        }

        let (w, h) = window.get_size();
        let stats = renderer.render(Viewport::new(w, h), &scene);
        window.set_title(&format!("ortho_rt - last render: {:.3}ms", stats.elapsed_ms));

        match renderer.film() {
            Some(film) if !film.is_empty() => {
                window.update_with_buffer(&film.to_0rgb(), film.width, film.height)?
            }
            // minimized, nothing to upload
            _ => window.update(),
        }
    }
    Ok(())
}

fn run_batch(scene: &Scene, opt: &Opt) -> Result<(), Box<dyn Error>> {
    let mut renderer = Renderer::new();
    let stats = renderer.render(Viewport::new(opt.width, opt.height), scene);
    tracing::info!(
        "rendered {}x{} in {:.3}ms",
        opt.width,
        opt.height,
        stats.elapsed_ms
    );

    match renderer.film() {
        Some(film) if !film.is_empty() => {
            if let Some(parent) = opt.output.parent() {
                fs::create_dir_all(parent)?;
            }
            film.write_png(&opt.output)?;
            tracing::info!("wrote {}", opt.output.display());
        }
        _ => tracing::warn!("viewport has no pixels, nothing written"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opt = Opt::from_args();
    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    tracing::debug!("using {} render threads", threads);

    let mut scene = match &opt.scene {
        Some(path) => load_scene(path)?,
        None => Scene::default(),
    };
    if opt.halve_hit_time {
        scene.hit_rule = HitRule::Halved;
    }

    if opt.window {
        run_window(scene, &opt)
    } else {
        run_batch(&scene, &opt)
    }
}
