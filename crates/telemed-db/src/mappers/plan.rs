//! Plan entity <-> model mapper

use telemed_core::entities::Plan;

use crate::models::PlanModel;

impl From<PlanModel> for Plan {
    fn from(model: PlanModel) -> Self {
        Plan {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            duration_months: model.duration_months,
            max_appointments_month: model.max_appointments_month,
            has_video_call: model.has_video_call,
            has_chat: model.has_chat,
            has_prescription: model.has_prescription,
            has_medical_certificate: model.has_medical_certificate,
            features: model.features,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
