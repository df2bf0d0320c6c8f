//! Curve group laws and known multiples over the ECCp challenge curves.

use eccp::{
    test_vectors::{EccpParams, ECCP_131, ECCP_79, ECCP_PARAMS},
    Curve, Field, FieldElement, ProjectivePoint,
};
use rand::{rngs::StdRng, SeedableRng};

fn affine(point: &ProjectivePoint<'_>) -> (String, String) {
    (
        format!("{}", point.affine_x().unwrap()),
        format!("{}", point.affine_y().unwrap()),
    )
}

#[test]
fn base_points_lie_on_valid_curves() {
    for params in ECCP_PARAMS {
        let field = Field::new(params.p).unwrap();
        assert_eq!(field.bits() as u32, params.bits);

        let a = FieldElement::from_hex(&field, params.a).unwrap();
        let b = FieldElement::from_hex(&field, params.b).unwrap();
        let curve = Curve::new(&field, a, b).unwrap();
        assert!(curve.is_valid());

        let gx = FieldElement::from_hex(&field, params.gx).unwrap();
        let gy = FieldElement::from_hex(&field, params.gy).unwrap();
        let g = ProjectivePoint::from_affine(&curve, gx, gy).unwrap();
        assert!(!g.is_identity());
    }
}

#[test]
fn group_laws_on_eccp79() {
    let params = &ECCP_79;
    let field = Field::new(params.p).unwrap();
    let a = FieldElement::from_hex(&field, params.a).unwrap();
    let b = FieldElement::from_hex(&field, params.b).unwrap();
    let curve = Curve::new(&field, a, b).unwrap();
    let gx = FieldElement::from_hex(&field, params.gx).unwrap();
    let gy = FieldElement::from_hex(&field, params.gy).unwrap();
    let g = ProjectivePoint::from_affine(&curve, gx, gy).unwrap();
    let o = ProjectivePoint::identity(&curve);

    // Identity and inverses.
    assert_eq!(g.add(&o), g);
    assert_eq!(o.add(&g), g);
    assert!(g.add(&g.negate()).is_identity());

    // Doubling, then negate-and-add back to infinity.
    let doubled = g.double();
    assert!(doubled.add(&doubled.negate()).is_identity());

    // Commutativity, compared in affine coordinates.
    let h = g.double();
    assert_eq!(affine(&g.add(&h)), affine(&h.add(&g)));

    // Doubling agrees with addition of the affine re-embedding.
    let h_affine = {
        let (x, y) = affine(&h);
        ProjectivePoint::from_affine(
            &curve,
            FieldElement::from_hex(&field, &x).unwrap(),
            FieldElement::from_hex(&field, &y).unwrap(),
        )
        .unwrap()
    };
    assert_eq!(affine(&h.add(&h_affine)), affine(&h.double()));
}

#[test]
fn known_small_multiples_of_eccp79_base() {
    let params = &ECCP_79;
    let field = Field::new(params.p).unwrap();
    let a = FieldElement::from_hex(&field, params.a).unwrap();
    let b = FieldElement::from_hex(&field, params.b).unwrap();
    let curve = Curve::new(&field, a, b).unwrap();
    let gx = FieldElement::from_hex(&field, params.gx).unwrap();
    let gy = FieldElement::from_hex(&field, params.gy).unwrap();
    let g = ProjectivePoint::from_affine(&curve, gx, gy).unwrap();

    let two_g = g.double();
    assert_eq!(
        affine(&two_g),
        (
            "46593e221adb47e3e095".to_string(),
            "59d642bee3920725a4e3".to_string()
        )
    );

    let three = FieldElement::from_word(&field, 3).unwrap();
    assert_eq!(
        affine(&g.multiply(&three)),
        (
            "309c44e420d39d810ab4".to_string(),
            "524ba857b9afede6da8e".to_string()
        )
    );
}

#[test]
fn public_keys_match_private_keys_on_all_curves() {
    for params in ECCP_PARAMS {
        let field = Field::new(params.p).unwrap();
        let order_field = Field::new(params.n).unwrap();
        let a = FieldElement::from_hex(&field, params.a).unwrap();
        let b = FieldElement::from_hex(&field, params.b).unwrap();
        let curve = Curve::new(&field, a, b).unwrap();
        let gx = FieldElement::from_hex(&field, params.gx).unwrap();
        let gy = FieldElement::from_hex(&field, params.gy).unwrap();
        let g = ProjectivePoint::from_affine(&curve, gx, gy).unwrap();

        let d = FieldElement::from_hex(&order_field, params.d).unwrap();
        let q = g.multiply(&d);
        let (qx, qy) = affine(&q);
        assert_eq!(qx, params.qx, "ECCp-{}", params.bits);
        assert_eq!(qy, params.qy, "ECCp-{}", params.bits);
    }
}

#[test]
fn base_point_order_annihilates_the_base_point() {
    for params in ECCP_PARAMS {
        let field = Field::new(params.p).unwrap();
        let order_field = Field::new(params.n).unwrap();
        let a = FieldElement::from_hex(&field, params.a).unwrap();
        let b = FieldElement::from_hex(&field, params.b).unwrap();
        let curve = Curve::new(&field, a, b).unwrap();
        let gx = FieldElement::from_hex(&field, params.gx).unwrap();
        let gy = FieldElement::from_hex(&field, params.gy).unwrap();
        let g = ProjectivePoint::from_affine(&curve, gx, gy).unwrap();

        // n*G = (n-1)*G + G = -G + G = O; n itself is not representable
        // in a field of order n, so multiply by n-1 and add.
        let n_minus_one = order_field.modulus().subtract(&order_field.one());
        let almost = g.multiply(&n_minus_one);
        assert!(almost.add(&g).is_identity(), "ECCp-{}", params.bits);
    }
}

#[test]
fn successive_scalars_differ_by_the_base_point() {
    let params = &ECCP_79;
    let field = Field::new(params.p).unwrap();
    let a = FieldElement::from_hex(&field, params.a).unwrap();
    let b = FieldElement::from_hex(&field, params.b).unwrap();
    let curve = Curve::new(&field, a, b).unwrap();
    let gx = FieldElement::from_hex(&field, params.gx).unwrap();
    let gy = FieldElement::from_hex(&field, params.gy).unwrap();
    let g = ProjectivePoint::from_affine(&curve, gx, gy).unwrap();

    for k in [1u32, 2, 3, 17, 1000, 65537, 0x7fffffff] {
        let scalar = FieldElement::from_word(&field, k).unwrap();
        let next = FieldElement::from_word(&field, k + 1).unwrap();
        let lhs = g.multiply(&next);
        let rhs = g.multiply(&scalar).add(&g);
        assert_eq!(affine(&lhs), affine(&rhs), "k = {k}");
    }
}

#[test]
fn window_widths_agree_on_eccp131() {
    let params: &EccpParams = &ECCP_131;
    let field = Field::new(params.p).unwrap();
    let order_field = Field::new(params.n).unwrap();
    let a = FieldElement::from_hex(&field, params.a).unwrap();
    let b = FieldElement::from_hex(&field, params.b).unwrap();
    let curve = Curve::new(&field, a, b).unwrap();
    let gx = FieldElement::from_hex(&field, params.gx).unwrap();
    let gy = FieldElement::from_hex(&field, params.gy).unwrap();
    let g = ProjectivePoint::from_affine(&curve, gx, gy).unwrap();

    let table = g.precompute_naf_points(6).unwrap();
    let mut rng = StdRng::seed_from_u64(1315);
    for _ in 0..8 {
        let k = FieldElement::random(&order_field, &mut rng);
        let wide = table.multiply(&k);
        let narrow = g.multiply_window(&k, 2).unwrap();
        if wide.is_identity() || narrow.is_identity() {
            assert_eq!(wide.is_identity(), narrow.is_identity());
            continue;
        }
        assert_eq!(affine(&wide), affine(&narrow));
    }
}
