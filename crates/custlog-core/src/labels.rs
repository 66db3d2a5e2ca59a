//! Built-in Thai display strings of the customer activity feed

use crate::model::FieldKind;

pub const SYSTEM_ACTOR: &str = "ระบบ";
pub const UNKNOWN_USER: &str = "ผู้ใช้ ID {id}";
pub const UNKNOWN_TAG: &str = "แท็ก ID {id}";
pub const EMPTY_VALUE: &str = "(ว่าง)";
pub const ABSENT_VALUE: &str = "-";
pub const BOOL_TRUE: &str = "ใช่";
pub const BOOL_FALSE: &str = "ไม่ใช่";
pub const CURRENCY_GLYPH: &str = "฿";

/// Bangkok, minutes east of UTC
pub const NAIVE_OFFSET_MINUTES: i32 = 7 * 60;

pub const ACTION_CREATE: &str = "สร้างข้อมูลลูกค้า";
pub const ACTION_UPDATE: &str = "ปรับปรุงข้อมูลลูกค้า";
pub const ACTION_DELETE: &str = "ลบข้อมูลลูกค้า";

pub const ASSIGNMENT_CHANGED: &str = "มอบหมายจาก {old} ไปยัง {new}";
pub const ASSIGNMENT_SET: &str = "มอบหมายให้ {new}";
pub const ASSIGNMENT_CLEARED: &str = "ยกเลิกการมอบหมายจาก {old}";
pub const TAG_ADDED: &str = "เพิ่มแท็ก: {name}";
pub const TAG_REMOVED: &str = "ลบแท็ก: {name}";

pub const FEED_HEADER: &str = "[{at}] {action} โดย {actor}";
pub const FEED_EMPTY: &str = "ไม่มีประวัติกิจกรรม";
pub const FEED_DROPPED: &str = "ข้ามรายการที่อ่านไม่ได้ {count} รายการ";

pub const BUCKET_LABELS: &[(&str, &str)] = &[
    ("ready", "ตะกร้าพร้อมแจก"),
    ("assigned", "มอบหมายแล้ว"),
    ("waiting_return", "รอส่งคืน"),
    ("stock", "สต็อก"),
];

pub const LIFECYCLE_LABELS: &[(&str, &str)] = &[
    ("New", "ลูกค้าใหม่"),
    ("Old", "ลูกค้าเดิม"),
    ("FollowUp", "ติดตาม"),
    ("Old3Months", "ลูกค้าเกิน 3 เดือน"),
    ("DailyDistribution", "ลูกค้าแจกประจำวัน"),
];

pub const BEHAVIORAL_LABELS: &[(&str, &str)] = &[
    ("Hot", "ลูกค้ากลุ่ม Hot"),
    ("Warm", "ลูกค้ากลุ่ม Warm"),
    ("Cold", "ลูกค้ากลุ่ม Cold"),
    ("Frozen", "ลูกค้ากลุ่ม Frozen"),
];

pub const INTERNAL_FIELDS: &[&str] = &[
    "id",
    "customer_id",
    "company_id",
    "created_at",
    "updated_at",
    "created_by",
    "updated_by",
    "customer_ref_id",
];

/// Registered fields: name, label, kind, status table
pub const FIELDS: &[(&str, &str, FieldKind, &[(&str, &str)])] = &[
    ("bucket_type", "ตะกร้าปัจจุบัน", FieldKind::Status, BUCKET_LABELS),
    ("lifecycle_status", "สถานะลูกค้า", FieldKind::Status, LIFECYCLE_LABELS),
    ("behavioral_status", "ระดับความสนใจ", FieldKind::Status, BEHAVIORAL_LABELS),
    ("assigned_to", "ผู้ดูแล", FieldKind::Assignment, &[]),
    ("tags", "แท็ก", FieldKind::TagSet, &[]),
    ("address", "ที่อยู่", FieldKind::Address, &[]),
    ("total_purchases", "ยอดซื้อรวม", FieldKind::Currency, &[]),
    ("total_calls", "จำนวนการโทร", FieldKind::Numeric, &[]),
    ("follow_up_count", "จำนวนการติดตาม", FieldKind::Numeric, &[]),
    ("ownership_expires", "วันหมดสิทธิ์ครอบครอง", FieldKind::Date, &[]),
    ("date_assigned", "วันที่มอบหมาย", FieldKind::Date, &[]),
    ("follow_up_date", "วันติดตาม", FieldKind::Date, &[]),
    ("last_follow_up_date", "วันติดตามล่าสุด", FieldKind::Date, &[]),
    ("last_sale_date", "วันที่ขายล่าสุด", FieldKind::Date, &[]),
    ("street", "ที่อยู่", FieldKind::Scalar, &[]),
    ("subdistrict", "ตำบล", FieldKind::Scalar, &[]),
    ("district", "อำเภอ", FieldKind::Scalar, &[]),
    ("province", "จังหวัด", FieldKind::Scalar, &[]),
    ("postal_code", "รหัสไปรษณีย์", FieldKind::Scalar, &[]),
    ("email", "อีเมล", FieldKind::Scalar, &[]),
    ("phone", "เบอร์โทร", FieldKind::Scalar, &[]),
    ("first_name", "ชื่อ", FieldKind::Scalar, &[]),
    ("last_name", "นามสกุล", FieldKind::Scalar, &[]),
    ("do_reason", "เหตุผลการ DO", FieldKind::Scalar, &[]),
    ("grade", "เกรดลูกค้า", FieldKind::Scalar, &[]),
];
