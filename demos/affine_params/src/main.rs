use argh::FromArgs;

use raster_affine::{
    transform_from_json, AffineTransform, CanvasSize, Composed, Rotate, Scale, Shear, Transform,
    Translate,
};

#[derive(FromArgs)]
/// Print the affine resampling parameters of a transform
struct Args {
    /// width of the source canvas
    #[argh(option, default = "280")]
    width: u32,

    /// height of the source canvas
    #[argh(option, default = "187")]
    height: u32,

    /// enlarge the output canvas to avoid clipping
    #[argh(switch, short = 'e')]
    expand: bool,

    /// json description of the transform, e.g. '{"type": "Rotate", "angle": 30.0}'
    #[argh(option, short = 't')]
    transform: Option<String>,
}

/// The transforms rendered when no description is given.
fn gallery() -> Result<Vec<(&'static str, Transform, bool)>, Box<dyn std::error::Error>> {
    Ok(vec![
        ("shear", Shear::new(30.0).into(), false),
        (
            "shear_clockwise",
            Shear::new(30.0).with_clockwise(true).into(),
            false,
        ),
        (
            "shear_off_center",
            Shear::new(30.0).with_center((0.0, 0.0)).into(),
            false,
        ),
        ("shear_expand", Shear::new(30.0).into(), true),
        ("rotate", Rotate::new(30.0).into(), false),
        (
            "rotate_clockwise",
            Rotate::new(30.0).with_clockwise(true).into(),
            false,
        ),
        (
            "rotate_off_center",
            Rotate::new(30.0).with_center((0.0, 0.0)).into(),
            false,
        ),
        ("scale", Scale::new(2.0).into(), false),
        ("scale_anisotropic", Scale::new((0.3, 1.0)).into(), false),
        (
            "scale_off_center",
            Scale::new(0.5).with_center((0.0, 0.0)).into(),
            false,
        ),
        ("translate", Translate::new((50.0, 20.0)).into(), false),
        (
            "translate_inverse",
            Translate::new((50.0, 20.0)).with_inverse(true).into(),
            false,
        ),
        (
            "composed_1",
            Composed::new(vec![
                Shear::new(45.0).into(),
                Rotate::new(30.0).into(),
                Scale::new(0.7).into(),
            ])?
            .into(),
            false,
        ),
        (
            "composed_2",
            Composed::new(vec![
                Scale::new((0.3, 0.7)).into(),
                Rotate::new(70.0).with_clockwise(true).into(),
                Translate::new((50.0, 20.0)).into(),
            ])?
            .into(),
            false,
        ),
    ])
}

fn print_params(
    name: &str,
    transform: &Transform,
    size: CanvasSize,
    expand: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = transform.resample_params(size, expand)?;
    println!("{name}:");
    for line in transform.to_string().lines() {
        println!("  {line}");
    }
    println!(
        "  -> {} {} {:?}",
        params.size, params.kind, params.coefficients
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let size = CanvasSize::new(args.width, args.height)?;

    match args.transform {
        Some(json) => {
            let transform = transform_from_json(&json)?;
            print_params("transform", &transform, size, args.expand)?;
        }
        None => {
            log::info!("rendering the transform gallery for a {size} canvas");
            for (name, transform, expand) in gallery()? {
                print_params(name, &transform, size, expand || args.expand)?;
            }
        }
    }

    Ok(())
}
