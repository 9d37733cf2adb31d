//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Estimateur de consommation \u{00E9}lectrique".into());
    t.insert("app.rate".into(), "Tarif : {rate} {currency}/kWh".into());
    t.insert("app.rate_unset".into(), "Le tarif est \u{00E0} 0 : les factures resteront \u{00E0} 0 tant qu'il n'est pas d\u{00E9}fini dans les Param\u{00E8}tres.".into());

    // Main menu
    t.insert("menu.prompt".into(), "Que voulez-vous faire ?".into());
    t.insert("menu.add".into(), "Ajouter un \u{00E9}quipement".into());
    t.insert("menu.catalog".into(), "Modifier les puissances courantes".into());
    t.insert("menu.totals".into(), "Calculer la facture totale et afficher le graphique".into());
    t.insert("menu.export".into(), "T\u{00E9}l\u{00E9}charger en Excel".into());
    t.insert("menu.settings".into(), "Tarif et devise".into());
    t.insert("menu.reset".into(), "R\u{00E9}initialiser".into());
    t.insert("menu.quit".into(), "Quitter".into());

    // Equipment form
    t.insert("form.equipment".into(), "Choisissez l'\u{00E9}quipement :".into());
    t.insert("form.other".into(), "Autre".into());
    t.insert("form.name".into(), "Nom de l'\u{00E9}quipement :".into());
    t.insert("form.rating".into(), "Puissance de l'\u{00E9}quipement en watts :".into());
    t.insert("form.usage".into(), "Utilisation quotidienne moyenne en heures :".into());
    t.insert("form.count".into(), "Nombre d'\u{00E9}quipements identiques :".into());
    t.insert("form.invalid_number".into(), "Veuillez saisir un nombre".into());

    // Single entry result
    t.insert("result.daily".into(), "Consommation quotidienne pour {count} {name} : {kwh} kWh".into());
    t.insert("result.bi_monthly".into(), "Consommation bimestrielle pour {count} {name} : {kwh} kWh".into());
    t.insert("result.bill".into(), "Facture bimestrielle estim\u{00E9}e : {amount} {currency}".into());
    t.insert("ledger.current".into(), "\u{00C9}quipements actuels :".into());

    // Totals
    t.insert("totals.consumption".into(), "Consommation bimestrielle totale : {kwh} kWh".into());
    t.insert("totals.bill".into(), "Facture bimestrielle totale estim\u{00E9}e : {amount} {currency}".into());
    t.insert("totals.chart_title".into(), "Consommation d'\u{00E9}nergie par \u{00E9}quipement".into());
    t.insert("totals.table".into(), "Donn\u{00E9}es de consommation :".into());
    t.insert("totals.no_data".into(), "Aucun \u{00E9}quipement pour calculer la facture totale.".into());

    // Export
    t.insert("export.saved".into(), "Rapport enregistr\u{00E9} dans {path}".into());
    t.insert("export.no_data".into(), "Aucun \u{00E9}quipement \u{00E0} exporter.".into());

    // Catalog
    t.insert("catalog.title".into(), "Puissances courantes (W) :".into());
    t.insert("catalog.action".into(), "Action sur le catalogue :".into());
    t.insert("catalog.set".into(), "D\u{00E9}finir ou ajouter une puissance".into());
    t.insert("catalog.remove".into(), "Supprimer un \u{00E9}quipement".into());
    t.insert("catalog.restore".into(), "Restaurer les valeurs par d\u{00E9}faut".into());
    t.insert("catalog.save".into(), "Enregistrer comme valeurs par d\u{00E9}faut".into());
    t.insert("catalog.back".into(), "Retour".into());
    t.insert("catalog.name".into(), "Nom de l'\u{00E9}quipement :".into());
    t.insert("catalog.not_offered".into(), "(non propos\u{00E9})".into());
    t.insert("catalog.empty".into(), "Le catalogue est vide.".into());

    // Settings
    t.insert("settings.rate".into(), "Tarif par kWh :".into());
    t.insert("settings.currency".into(), "Devise du tarif :".into());
    t.insert("settings.save".into(), "Enregistrer ces param\u{00E8}tres par d\u{00E9}faut ?".into());
    t.insert("settings.saved".into(), "Param\u{00E8}tres enregistr\u{00E9}s dans {path}".into());
    t.insert("settings.not_saved".into(), "{path} n'a pas \u{00E9}t\u{00E9} modifi\u{00E9} : {error}".into());

    // Reset
    t.insert("reset.confirm".into(), "Supprimer tous les \u{00E9}quipements saisis ?".into());
    t.insert("reset.done".into(), "Tous les \u{00E9}quipements ont \u{00E9}t\u{00E9} supprim\u{00E9}s.".into());

    // Errors
    t.insert("error.invalid_input".into(), "Veuillez saisir des valeurs valides pour tous les champs.".into());
    t.insert("error.store".into(), "\u{00C9}quipement ajout\u{00E9}, mais l'\u{00E9}criture dans {path} a \u{00E9}chou\u{00E9} : {error}".into());
    t.insert("error.generic".into(), "Erreur : {error}".into());

    t
}
