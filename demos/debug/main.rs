//! Builds every brush with default parameters and logs what came out.
//!
//! Run with `cargo run --example debug`; override logging with `RUST_LOG`.

use brushwork::brushes::{all_brushes, BrushGenerator, Torus, TorusParams};
use brushwork::geometry::BoundingBox;
use brushwork::math::Point3;
use brushwork::operations::query::ValidateSolid;
use brushwork::tessellation::TessellateSolid;
use brushwork::topology::SequentialIds;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::{info, warn};

fn main() {
    // Default: WARN for everything, INFO for brushwork.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("brushwork=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let bbox = BoundingBox::new(Point3::origin(), Point3::new(256.0, 256.0, 128.0));
    let mut ids = SequentialIds::new();
    let mut rng = Pcg64::seed_from_u64(0);

    let mut generators = all_brushes();
    generators.push(Box::new(Torus::new(TorusParams {
        hollow: true,
        ..TorusParams::default()
    })));

    for generator in &generators {
        let solids = generator.create(&mut ids, &bbox, "debug", 2, &mut rng);
        let mut triangles = 0;
        for solid in &solids {
            let issues = ValidateSolid::new().execute(solid);
            if !issues.is_empty() {
                warn!(brush = generator.name(), solid = solid.id().0, ?issues, "invalid solid");
            }
            triangles += TessellateSolid::new().execute(solid).triangle_count();
        }
        info!(
            brush = generator.name(),
            solids = solids.len(),
            triangles,
            "generated"
        );
    }
}
