//! The practice's built-in service lists and checklist templates.

use crate::catalog::{ChecklistTemplate, ServiceCatalog, ServiceDefinition, service_slug};
use crate::domain::service::ServiceCategory;

const PPAT_SERVICES: [&str; 17] = [
    "Jual Beli",
    "Hibah",
    "Tukar Menukar",
    "Lelang",
    "APHB",
    "Warisan",
    "Pemecahan / Penggabungan Sertipikat",
    "Pembaharuan Hak / Permohonan Hak",
    "Peningkatan Hak",
    "Permohonan Sertipikat Hilang",
    "Permohonan TN",
    "Roya",
    "Penataan Batas",
    "Ralat Data",
    "Ganti Kelurahan",
    "Revisi / Pecah PBB",
    "Lain-lain PPAT",
];

const NOTARIS_SERVICES: [&str; 14] = [
    "CV",
    "PT",
    "Firma",
    "Persekutuan Perdata",
    "Koperasi",
    "Yayasan",
    "Perkumpulan",
    "Sewa-Menyewa",
    "PPJB",
    "Kerjasama",
    "Kesepakatan",
    "Pembagian Warisan",
    "IMB (PBG) / HAKI",
    "Lain-lain Notaris",
];

/// The shared template for PPAT land-transfer deeds (Jual Beli, Hibah,
/// Tukar Menukar, Lelang, APHB, Warisan).
fn land_transfer_template() -> ChecklistTemplate {
    ChecklistTemplate::new([
        ("sppt_pbb", "SPPT PBB"),
        ("nop", "NOP"),
        ("bphtb_ssb", "BPHTB / SSB"),
        ("ssp", "SSP"),
        ("pengajuan_skb", "Pengajuan SKB"),
        ("validasi_su_el", "Validasi SU-el"),
        ("cek_sertifikat", "Cek Sertifikat"),
        ("znt", "ZNT"),
        ("bpn", "BPN"),
        ("selesai", "Selesai"),
    ])
}

/// The shared template for NOTARIS legal-entity incorporation (CV, PT,
/// Firma, Persekutuan Perdata, Koperasi, Yayasan, Perkumpulan).
fn incorporation_template() -> ChecklistTemplate {
    ChecklistTemplate::new([
        ("pesan_nama", "Pesan Nama"),
        ("proses_pembuatan_akta", "Proses Pembuatan Akta"),
        ("permohonan_sk_kemenkumham", "Permohonan SK/SP/SKT Kemenkumham"),
        ("bnri_tbnri", "BNRI-TBNRI"),
        ("npwp_badan", "NPWP Badan"),
        ("oss_nib", "OSS / NIB"),
        ("selesai", "Selesai"),
    ])
}

fn definitions(
    category: ServiceCategory,
    labels: &[&str],
) -> Vec<(ServiceCategory, ServiceDefinition)> {
    labels
        .iter()
        .map(|label| {
            (
                category,
                ServiceDefinition {
                    key: service_slug(category, label),
                    label: (*label).to_string(),
                    is_free_text: label.to_lowercase().starts_with("lain-lain"),
                },
            )
        })
        .collect()
}

/// Builds the full built-in catalog. Services without an entry here fall
/// back to the category's single-step default template.
pub(super) fn standard_catalog() -> ServiceCatalog {
    let mut all_definitions = definitions(ServiceCategory::Ppat, &PPAT_SERVICES);
    all_definitions.extend(definitions(ServiceCategory::Notaris, &NOTARIS_SERVICES));

    let mut templates = Vec::new();

    for label in [
        "Jual Beli",
        "Hibah",
        "Tukar Menukar",
        "Lelang",
        "APHB",
        "Warisan",
    ] {
        templates.push((
            ServiceCategory::Ppat,
            service_slug(ServiceCategory::Ppat, label),
            land_transfer_template(),
        ));
    }

    templates.push((
        ServiceCategory::Ppat,
        service_slug(ServiceCategory::Ppat, "Pemecahan / Penggabungan Sertipikat"),
        ChecklistTemplate::new([
            ("tapak_kapling", "Tapak Kapling"),
            ("pengukuran_pemecahan", "Pengukuran dan Pemecahan"),
            ("selesai", "Selesai"),
        ]),
    ));

    templates.push((
        ServiceCategory::Ppat,
        service_slug(ServiceCategory::Ppat, "Pembaharuan Hak / Permohonan Hak"),
        ChecklistTemplate::new([
            ("pkkpr", "PKKPR"),
            ("pelepasan_hak", "Pelepasan Hak"),
            ("pengukuran", "Pengukuran"),
            ("permohonan_skph", "Permohonan SKPH"),
            ("ssb_bphtb", "SSB / BPHTB"),
            ("permohonan_hat", "Permohonan HAT"),
            ("selesai", "Selesai"),
        ]),
    ));

    templates.push((
        ServiceCategory::Ppat,
        service_slug(ServiceCategory::Ppat, "Permohonan Sertipikat Hilang"),
        ChecklistTemplate::new([
            ("pengukuran", "Pengukuran"),
            ("sumpah", "Sumpah"),
            ("pengumuman", "Pengumuman"),
            ("selesai", "Selesai"),
        ]),
    ));

    for label in [
        "CV",
        "PT",
        "Firma",
        "Persekutuan Perdata",
        "Koperasi",
        "Yayasan",
        "Perkumpulan",
    ] {
        templates.push((
            ServiceCategory::Notaris,
            service_slug(ServiceCategory::Notaris, label),
            incorporation_template(),
        ));
    }

    templates.push((
        ServiceCategory::Notaris,
        service_slug(ServiceCategory::Notaris, "IMB (PBG) / HAKI"),
        ChecklistTemplate::new([
            ("proses_pengerjaan", "Proses Pengerjaan"),
            ("selesai", "Selesai"),
        ]),
    ));

    ServiceCatalog::new(all_definitions, templates)
}
