mod common;

use cerviscan::color::{color_moments, ColorSpace};
use cerviscan::features::{AssemblerParams, FeatureAssembler, FeatureSelection, TextureMethod};
use cerviscan::image::io::{save_gray_u8, save_rgb_u8};
use cerviscan::image::{GrayImageU8, LabelImage, RgbImageU8};
use cerviscan::preprocess::{composite, rgb_to_gray};
use cerviscan::texture::{Direction, RunLengthMatrix};
use cerviscan::PipelineError;
use common::synthetic_image::{checkerboard_rgb, lesion_rgb};

#[test]
fn rgb_selection_yields_nine_named_features() {
    let assembler = FeatureAssembler::new(AssemblerParams {
        selection: FeatureSelection::only_color([ColorSpace::Rgb]),
        glrlm_lbp: false,
    });
    let v = assembler.assemble(&lesion_rgb(30, 20)).unwrap();
    assert_eq!(v.len(), 9);
    assert_eq!(v.names().len(), v.values().len());
}

#[test]
fn full_selection_concatenates_every_extractor() {
    let rgb = lesion_rgb(40, 32);
    let v = FeatureAssembler::default().assemble(&rgb).unwrap();
    assert_eq!(v.names().len(), v.values().len());
    // 27 colour + 10 LBP + 44 GLRLM + 3 Tamura columns before the filter.
    assert!(v.len() <= 84);
    assert!(v.len() >= 60, "too many columns dropped: {}", v.len());
    // mean_b is produced by both RGB and LAB.
    assert_eq!(v.names().iter().filter(|n| *n == "mean_b").count(), 2);
    assert!(v.values().iter().all(|&x| x != 1.0 && !x.is_nan()));
}

#[test]
fn texture_only_selection_skips_colour_moments() {
    let assembler = FeatureAssembler::new(AssemblerParams {
        selection: FeatureSelection::only_texture([TextureMethod::Tamura]),
        glrlm_lbp: false,
    });
    let v = assembler.assemble(&lesion_rgb(32, 32)).unwrap();
    assert!(v.names().iter().all(|n| n.starts_with("tamura_")));
}

#[test]
fn assemble_path_matches_in_memory_assembly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("segmented.png");
    let rgb = lesion_rgb(24, 24);
    save_rgb_u8(&rgb, &path).unwrap();

    let assembler = FeatureAssembler::default();
    assert_eq!(
        assembler.assemble_path(&path).unwrap(),
        assembler.assemble(&rgb).unwrap()
    );
}

#[test]
fn assemble_path_rejects_grayscale_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    save_gray_u8(&GrayImageU8::filled(4, 4, 77), &path).unwrap();
    let err = FeatureAssembler::default().assemble_path(&path).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidImage(_)), "{err}");
}

#[test]
fn colour_moments_of_constant_image_have_zero_skew() {
    let rgb = RgbImageU8::filled(6, 6, [90, 40, 200]);
    for space in ColorSpace::ALL {
        let v = color_moments(&rgb, space).unwrap();
        for (name, value) in v.iter().filter(|(n, _)| n.starts_with("skew_")) {
            assert_eq!(value, 0.0, "{space} {name}");
        }
    }
}

#[test]
fn run_totals_stay_within_bounds() {
    let gray = rgb_to_gray(&checkerboard_rgb(21, 13, 4));
    let pixels = (21 * 13) as u64;
    for dir in Direction::ALL {
        let m = RunLengthMatrix::compute(gray.as_view(), dir);
        assert!(m.total_runs() <= pixels, "{dir:?}");
        assert!(m.total_runs() >= dir.line_count(21, 13) as u64, "{dir:?}");
        assert_eq!(m.total_pixels(), pixels, "{dir:?}");
    }
}

#[test]
fn composite_with_all_or_no_selection() {
    let rgb = lesion_rgb(10, 6);
    let all = LabelImage::from_raw(10, 6, 3, vec![2; 60]).unwrap();
    assert_eq!(composite(&rgb, &all, 2).unwrap(), rgb);

    let none = LabelImage::from_raw(10, 6, 3, vec![0; 60]).unwrap();
    let out = composite(&rgb, &none, 2).unwrap();
    assert!(out.pixels().iter().all(|p| *p == [0, 0, 0]));

    let wrong = LabelImage::from_raw(6, 10, 3, vec![2; 60]).unwrap();
    assert!(matches!(
        composite(&rgb, &wrong, 2),
        Err(PipelineError::ShapeMismatch { .. })
    ));
}
