use anyhow::{Context, Result};

/// A representative excerpt of the OHADA chart of accounts.
/// Some numbers carry thousands-style spacing or dots on purpose.
const ACCOUNTS: &[(&str, &str, &str)] = &[
    ("CLASSE", "Comptes de ressources durables", "Titre"),
    ("101", "Capital social", "Bilan"),
    ("1 06 000", "Réserves", "Bilan"),
    ("162", "Emprunts et dettes auprès des établissements de crédit", "Bilan"),
    ("211", "Frais de développement", "Bilan"),
    ("2 45 000", "Matériel de transport", "Bilan"),
    ("281", "Amortissements des immobilisations incorporelles", "Bilan"),
    ("311", "Marchandises A", "Bilan"),
    ("32", "Matières premières et fournitures liées", "Bilan"),
    ("401", "Fournisseurs, dettes en compte", "Bilan"),
    ("411", "Clients", "Bilan"),
    ("4.431", "État, TVA facturée", "Bilan"),
    ("521", "Banques locales", "Bilan"),
    ("571", "Caisse siège social", "Bilan"),
    ("601", "Achats de marchandises", "Gestion"),
    ("602", "Achats de matières premières et fournitures liées", "Gestion"),
    ("6 05 000", "Autres achats", "Gestion"),
    ("661", "Rémunérations directes versées au personnel national", "Gestion"),
    ("701", "Ventes de marchandises", "Gestion"),
    ("702", "Ventes de produits finis", "Gestion"),
    ("706", "Services vendus", "Gestion"),
    ("811", "Valeurs comptables des cessions d'immobilisations", "HAO"),
    ("891", "Impôts sur les bénéfices de l'exercice", "HAO"),
    ("901", "Engagements obtenus", "Engagements"),
    ("905", "Engagements accordés", "Engagements"),
];

fn main() -> Result<()> {
    let output_path = std::env::args().nth(1).unwrap_or_else(|| "planco.csv".to_string());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(["Numéro de compte", "Intitulé du compte", "Nature"])?;
    for &(number, title, nature) in ACCOUNTS {
        writer.write_record([number, title, nature])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} accounts to {output_path}", ACCOUNTS.len());
    Ok(())
}
