//! Text catalog for the invoice page

use super::PageVariant;
use serde::Serialize;

/// Every piece of text the page shows, for one variant
///
/// Serialized into the page so the client script never hard-codes text.
#[derive(Debug, Clone, Serialize)]
pub struct Labels {
    pub lang: &'static str,
    pub dir: &'static str,
    pub title: &'static str,
    pub print: &'static str,
    pub customer_name: &'static str,
    pub customer_name_placeholder: &'static str,
    pub amount: &'static str,
    pub amount_placeholder: &'static str,
    pub due_date: &'static str,
    pub created_at: &'static str,
    pub actions: &'static str,
    pub status: &'static str,
    pub status_pending: &'static str,
    pub status_overdue: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub creating: &'static str,
    pub updating: &'static str,
    pub cancel_edit: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub invoices: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub fill_all_fields: &'static str,
    pub confirm_delete: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub fetch_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
}

impl Labels {
    pub fn for_variant(variant: PageVariant) -> &'static Labels {
        match variant {
            PageVariant::Standard => &ENGLISH,
            PageVariant::Arabic => &ARABIC,
        }
    }
}

static ENGLISH: Labels = Labels {
    lang: "en",
    dir: "ltr",
    title: "Invoice Generator",
    print: "Print Page",
    customer_name: "Customer Name",
    customer_name_placeholder: "e.g. John Doe",
    amount: "Amount",
    amount_placeholder: "e.g. 1500",
    due_date: "Due Date",
    created_at: "Created At",
    actions: "Actions",
    status: "Status",
    status_pending: "Pending",
    status_overdue: "Overdue",
    create: "Create Invoice",
    update: "Update Invoice",
    creating: "Processing...",
    updating: "Updating...",
    cancel_edit: "Cancel",
    edit: "Edit",
    delete: "Delete",
    invoices: "Invoices",
    loading: "Loading invoices...",
    empty: "No invoices yet.",
    fill_all_fields: "Please fill in all fields.",
    confirm_delete: "Are you sure you want to delete this invoice?",
    created: "Invoice created successfully.",
    updated: "Invoice updated successfully.",
    deleted: "Invoice deleted successfully.",
    fetch_failed: "Error fetching invoices.",
    save_failed: "Error while saving the invoice.",
    delete_failed: "Error while deleting the invoice.",
};

static ARABIC: Labels = Labels {
    lang: "ar",
    dir: "rtl",
    title: "مولّد الفواتير",
    print: "طباعة الصفحة",
    customer_name: "اسم العميل",
    customer_name_placeholder: "مثال: محمد أحمد",
    amount: "المبلغ",
    amount_placeholder: "مثال: 1500",
    due_date: "تاريخ الاستحقاق",
    created_at: "تاريخ الإنشاء",
    actions: "الإجراءات",
    status: "الحالة",
    status_pending: "قيد الانتظار",
    status_overdue: "متأخرة",
    create: "إنشاء فاتورة",
    update: "تحديث الفاتورة",
    creating: "جارٍ المعالجة...",
    updating: "جارٍ التحديث...",
    cancel_edit: "إلغاء",
    edit: "تعديل",
    delete: "حذف",
    invoices: "الفواتير",
    loading: "جارٍ تحميل الفواتير...",
    empty: "لا توجد فواتير بعد.",
    fill_all_fields: "يرجى تعبئة جميع الحقول.",
    confirm_delete: "هل أنت متأكد من حذف هذه الفاتورة؟",
    created: "تم إنشاء الفاتورة بنجاح.",
    updated: "تم تحديث الفاتورة بنجاح.",
    deleted: "تم حذف الفاتورة بنجاح.",
    fetch_failed: "حدث خطأ أثناء جلب الفواتير.",
    save_failed: "حدث خطأ أثناء حفظ الفاتورة.",
    delete_failed: "حدث خطأ أثناء حذف الفاتورة.",
};
