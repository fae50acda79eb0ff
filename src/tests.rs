use crate::geom::{Atom, Molecule};

#[test]
fn test_atom_line() {
    let tests = [
        (
            Atom::new("Be", 0.0, 0.0, 0.0),
            "Be      0.000000      0.000000      0.000000",
        ),
        (
            Atom::new("H", 0.0, -0.7574590974, 0.5217905143),
            "H       0.000000     -0.757459      0.521791",
        ),
        (
            Atom::new("Xe", 1234.5, 0.0000004, -0.25),
            "Xe   1234.500000      0.000000     -0.250000",
        ),
    ];
    for (atom, want) in tests {
        assert_eq!(atom.to_string(), want);
    }
}

#[test]
fn test_molecule_body() {
    let mol = Molecule::new(
        1,
        2,
        vec![
            Atom::new("N", 0.0, 0.0, 0.0),
            Atom::new("H", 0.0, 0.0, 1.01),
        ],
    );
    assert_eq!(
        mol.to_string(),
        "1 2
N       0.000000      0.000000      0.000000
H       0.000000      0.000000      1.010000
"
    );
    assert!(mol.is_well_formed());
}

#[test]
fn test_atom_order_preserved() {
    let labels = ["C", "O", "H", "H", "N"];
    let atoms = labels
        .iter()
        .enumerate()
        .map(|(i, l)| Atom::new(l, i as f64, 0.0, 0.0))
        .collect();
    let mol = Molecule::new(0, 1, atoms);
    let got: Vec<_> = mol.atoms().iter().map(Atom::symbol).collect();
    assert_eq!(got, labels);
    let got: Vec<_> = mol
        .to_string()
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().next().unwrap().to_owned())
        .collect();
    assert_eq!(got, labels);
}

#[test]
fn test_serde() {
    let mol = Molecule::new(0, 3, vec![Atom::new("Be", 0.0, 0.0, 0.5)]);
    let s = serde_json::to_string(&mol).unwrap();
    assert_eq!(
        s,
        r#"{"charge":0,"multiplicity":3,"atoms":[{"symbol":"Be","x":0.0,"y":0.0,"z":0.5}]}"#
    );
    let got: Molecule = serde_json::from_str(&s).unwrap();
    assert_eq!(got, mol);
    assert_eq!(got.atoms()[0].coord(), [0.0, 0.0, 0.5]);
}
