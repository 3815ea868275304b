use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::default_db_path;
use crate::domain::entities::day_sheet::today_date_key;
use crate::infra::store::sqlite::SqliteStore;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::stock_service::{filter_products, StockService};

#[component]
pub fn App() -> Element {
    let db_path = match default_db_path() {
        Ok(path) => path,
        Err(err) => {
            return rsx! {
                div {
                    p { "Não foi possível resolver o armazenamento local: {err}" }
                }
            };
        }
    };

    let AppState {
        mut catalog,
        mut sheet,
        mut active_category,
        mut search,
        mut busy,
        mut status,
    } = AppState::new();

    let service = Arc::new(StockService::new(Arc::new(SqliteStore::new(db_path))));

    let service_for_init = service.clone();
    use_effect(move || {
        *busy.write() = true;
        let today = today_date_key();

        let loaded = service_for_init
            .init()
            .and_then(|_| service_for_init.load_or_default(&today));
        match loaded {
            Ok((stored_catalog, mut stored_sheet)) => {
                match service_for_init.rollover_if_needed(&mut stored_sheet, &today) {
                    Ok(true) => {
                        *status.write() =
                            format!("Novo dia ({today}); quantidades de ontem mantidas");
                    }
                    Ok(false) => {
                        *status.write() = "Pronto".to_string();
                    }
                    Err(err) => {
                        *status.write() = format!("Falha ao virar o dia: {err}");
                    }
                }
                *active_category.write() =
                    stored_catalog.categories.first().map(|c| c.name.clone());
                *catalog.write() = stored_catalog;
                *sheet.write() = stored_sheet;
            }
            Err(err) => {
                *status.write() = format!("Falha ao carregar dados locais: {err}");
            }
        }
        *busy.write() = false;
    });

    let current_catalog = catalog();
    let current_sheet = sheet();
    let current_category_name = active_category();
    let search_text = search();
    let status_text = status();

    let tabs: Vec<(String, usize, bool)> = current_catalog
        .categories
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                c.products.len(),
                Some(c.name.as_str()) == current_category_name.as_deref(),
            )
        })
        .collect();

    let visible_products: Vec<(String, String, String)> = {
        let active = current_category_name
            .as_deref()
            .and_then(|name| current_catalog.find_category(name));
        filter_products(active, &search_text)
            .into_iter()
            .map(|p| {
                (
                    p.id.clone(),
                    p.name.clone(),
                    current_sheet.quantity(&p.id).to_string(),
                )
            })
            .collect()
    };

    let has_catalog = !current_catalog.categories.is_empty();
    let date_key = current_sheet.date_key.clone();

    let service_for_import = service.clone();
    let service_for_clear = service.clone();
    let service_for_quantity = service.clone();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px; max-width: 720px;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("Planilhas", &["csv", "txt", "xlsx", "xls", "ods"])
                            .pick_file() else {
                            *status.write() = "Importação cancelada".to_string();
                            return;
                        };

                        *busy.write() = true;
                        *status.write() = format!("Importando {}", file_path.display());

                        let fallback_name = category_name_from_path(&file_path);
                        let imported = run_blocking(|| {
                            let bytes = std::fs::read(&file_path).with_context(|| {
                                format!("failed to read file: {}", file_path.display())
                            })?;
                            service_for_import.import_catalog(&bytes, &fallback_name)
                        });

                        match imported {
                            Ok(new_catalog) => {
                                let category_count = new_catalog.categories.len();
                                let product_count = new_catalog.product_count();
                                *active_category.write() =
                                    new_catalog.categories.first().map(|c| c.name.clone());
                                *catalog.write() = new_catalog;
                                *status.write() = format!(
                                    "Catálogo importado: {category_count} categorias, {product_count} produtos"
                                );
                            }
                            Err(err) => {
                                *status.write() = format!("Falha ao importar: {err}");
                            }
                        }

                        *busy.write() = false;
                    },
                    "Importar planilha"
                }

                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let confirmed = MessageDialog::new()
                            .set_level(MessageLevel::Warning)
                            .set_title("Limpar quantidades")
                            .set_description("Apagar todas as quantidades de hoje? Esta ação não pode ser desfeita.")
                            .set_buttons(MessageButtons::YesNo)
                            .show();
                        if confirmed != MessageDialogResult::Yes {
                            return;
                        }

                        *busy.write() = true;
                        let today = today_date_key();
                        let mut current = sheet();
                        match service_for_clear.clear_all(&mut current, &today) {
                            Ok(()) => {
                                *sheet.write() = current;
                                *status.write() = "Quantidades limpas".to_string();
                            }
                            Err(err) => {
                                *status.write() = format!("Falha ao limpar quantidades: {err}");
                            }
                        }
                        *busy.write() = false;
                    },
                    "Limpar quantidades"
                }

                span {
                    style: "margin-left: auto; color: #666;",
                    "Dia: {date_key}"
                }
            }

            if has_catalog {
                div {
                    style: "display: flex; gap: 6px; margin: 8px 0; flex-wrap: wrap;",
                    for (name, count, is_active) in tabs {
                        button {
                            disabled: busy(),
                            onclick: {
                                let name = name.clone();
                                move |_| {
                                    *active_category.write() = Some(name.clone());
                                }
                            },
                            if is_active {
                                "[{name} ({count})]"
                            } else {
                                "{name} ({count})"
                            }
                        }
                    }
                }

                div {
                    style: "margin: 8px 0;",
                    label { "Buscar produto " }
                    input {
                        disabled: busy(),
                        value: search_text.clone(),
                        oninput: move |event| {
                            *search.write() = event.value();
                        },
                    }
                }

                if visible_products.is_empty() {
                    p { "Nenhum produto encontrado." }
                } else {
                    table {
                        style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                th { style: "text-align: left; border-bottom: 1px solid #bbb; padding: 6px;", "Produto" }
                                th { style: "text-align: left; border-bottom: 1px solid #bbb; padding: 6px;", "Quantidade" }
                            }
                        }
                        tbody {
                            for (product_id, product_name, quantity) in visible_products {
                                tr {
                                    td {
                                        style: "border-bottom: 1px solid #eee; padding: 6px;",
                                        "{product_name}"
                                    }
                                    td {
                                        style: "border-bottom: 1px solid #eee; padding: 6px;",
                                        input {
                                            disabled: busy(),
                                            value: quantity,
                                            placeholder: "ex.: 10 kg, 3 cx",
                                            oninput: {
                                                let service = service_for_quantity.clone();
                                                let product_id = product_id.clone();
                                                move |event| {
                                                    let mut current = sheet();
                                                    match service.set_quantity(&mut current, &product_id, &event.value()) {
                                                        Ok(()) => {
                                                            *sheet.write() = current;
                                                        }
                                                        Err(err) => {
                                                            *status.write() = format!("Falha ao salvar quantidade: {err}");
                                                        }
                                                    }
                                                }
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                p { "Nenhum catálogo carregado. Use \"Importar planilha\" para começar." }
            }

            p {
                style: "color: #666; margin-top: 12px;",
                "{status_text}"
            }
        }
    }
}

fn category_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("planilha")
        .to_string()
}
