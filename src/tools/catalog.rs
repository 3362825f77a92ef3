/// Static tool catalog
///
/// One descriptor per `ToolName`, produced through an exhaustive match so a
/// new enum variant cannot ship without a schema. Descriptions are
/// English/Chinese pairs; input schemas are plain JSON Schema literals
/// mirroring the typed parameter structs the dispatch layer decodes into.

use serde_json::json;

use crate::i18n::Language;
use crate::mcp::protocol::ToolDefinition;
use crate::tools::ToolName;

/// All tool descriptors in catalog order
pub fn catalog(lang: Language) -> Vec<ToolDefinition> {
    ToolName::ALL
        .iter()
        .map(|tool| definition(*tool, lang))
        .collect()
}

/// The descriptor for one tool
pub fn definition(tool: ToolName, lang: Language) -> ToolDefinition {
    match tool {
        ToolName::GetUserProfile => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve complete user profile information including stats, preferences, and account details from Habitica",
                    "获取完整的 Habitica 用户资料，包括属性、偏好设置和账号信息",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolName::GetTasks => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Fetch user's tasks from Habitica. Optionally filter by task type (habits, dailys, todos, rewards). Returns all tasks if no type specified",
                    "获取用户在 Habitica 的任务，可按类型过滤（habits、dailys、todos、rewards），不指定类型时返回全部任务",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["habits", "dailys", "todos", "rewards"],
                        "description": "Filter tasks by type: 'habits' for repeated behaviors, 'dailys' for daily recurring tasks, 'todos' for one-time tasks, 'rewards' for custom rewards"
                    }
                }
            }),
        },
        ToolName::CreateTask => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Create a new task in Habitica. Supports all task types: habits (positive/negative behaviors), dailies (recurring tasks), todos (one-time tasks), and rewards (custom purchases)",
                    "在 Habitica 中创建新任务，支持全部任务类型：habit（习惯）、daily（每日任务）、todo（待办）和 reward（自定义奖励）",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["habit", "daily", "todo", "reward"],
                        "description": "Task type: 'habit' for behaviors to track, 'daily' for recurring tasks, 'todo' for one-time tasks, 'reward' for custom rewards to purchase"
                    },
                    "text": {
                        "type": "string",
                        "description": "The main title/name of the task that will be displayed"
                    },
                    "notes": {
                        "type": "string",
                        "description": "Optional detailed description or notes about the task"
                    },
                    "difficulty": {
                        "type": "number",
                        "enum": [0.1, 1, 1.5, 2],
                        "description": "Task difficulty affecting rewards: 0.1=trivial (easy), 1=easy (default), 1.5=medium, 2=hard (more rewards)"
                    },
                    "priority": {
                        "type": "number",
                        "enum": [0.1, 1, 1.5, 2],
                        "description": "Task priority affecting damage when missed: 0.1=low, 1=medium (default), 1.5=high, 2=critical (more damage if not completed)"
                    },
                    "checklist": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "text": {
                                    "type": "string",
                                    "description": "Text content of the checklist item"
                                },
                                "completed": {
                                    "type": "boolean",
                                    "description": "Whether this checklist item starts as completed (default: false)",
                                    "default": false
                                }
                            },
                            "required": ["text"]
                        },
                        "description": "Optional array of sub-tasks/checklist items to add to this task"
                    }
                },
                "required": ["type", "text"]
            }),
        },
        ToolName::ScoreTask => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Mark a task as completed or score a habit. For todos/dailies, this marks completion and grants rewards. For habits, specify direction for positive/negative scoring",
                    "完成任务或为习惯计分：todo/daily 会被标记完成并获得奖励，habit 需要指定正负计分方向",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the task to score (obtained from get_tasks)"
                    },
                    "direction": {
                        "type": "string",
                        "enum": ["up", "down"],
                        "description": "Scoring direction for habits: 'up' for positive behavior (rewards), 'down' for negative behavior (penalties). Not needed for todos/dailies"
                    }
                },
                "required": ["taskId"]
            }),
        },
        ToolName::UpdateTask => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Modify an existing task's properties such as title, notes, or completion status. Only provide the fields you want to change",
                    "修改已有任务的标题、备注或完成状态，只需提供想要更改的字段",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the task to update (obtained from get_tasks)"
                    },
                    "text": {
                        "type": "string",
                        "description": "New title/name for the task"
                    },
                    "notes": {
                        "type": "string",
                        "description": "New description or notes for the task"
                    },
                    "completed": {
                        "type": "boolean",
                        "description": "Set completion status for todos (true=completed, false=incomplete)"
                    }
                },
                "required": ["taskId"]
            }),
        },
        ToolName::DeleteTask => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Permanently remove a task from Habitica. This action cannot be undone",
                    "从 Habitica 中永久删除任务，此操作无法撤销",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the task to delete (obtained from get_tasks)"
                    }
                },
                "required": ["taskId"]
            }),
        },
        ToolName::GetStats => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve user's character statistics including health, experience, mana, gold, level, and class information",
                    "获取角色属性，包括生命值、经验、法力、金币、等级和职业信息",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolName::BuyReward => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Purchase a custom reward using gold. This will deduct the reward's cost from your gold balance",
                    "用金币购买自定义奖励，奖励的价格会从金币余额中扣除",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "key": {
                        "type": "string",
                        "description": "The unique identifier or key of the reward to purchase (obtained from get_tasks with type 'rewards')"
                    }
                },
                "required": ["key"]
            }),
        },
        ToolName::GetInventory => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve user's complete inventory including items, equipment, pets, mounts, food, eggs, hatching potions, and quest items",
                    "获取完整的物品清单，包括装备、宠物、坐骑、食物、蛋、孵化药水和任务道具",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolName::CastSpell => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Use a class-specific spell or skill. Requires sufficient mana and appropriate class. Optionally target another user or specific entity",
                    "使用职业技能，需要足够的法力和对应职业，可选择指定目标用户或实体",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "spellId": {
                        "type": "string",
                        "description": "The unique identifier of the spell to cast (varies by class: mage, warrior, healer, rogue)"
                    },
                    "targetId": {
                        "type": "string",
                        "description": "Optional target user ID for spells that affect other players (party members, etc.)"
                    }
                },
                "required": ["spellId"]
            }),
        },
        ToolName::GetTags => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve all user-created tags for organizing and categorizing tasks. Tags can be applied to any task type",
                    "获取用户创建的全部标签，标签可用于组织和分类任意类型的任务",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolName::CreateTag => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Create a new tag for organizing tasks. Tags help categorize and filter tasks by context, project, or any custom criteria",
                    "创建新标签，便于按场景、项目或任意自定义标准分类和筛选任务",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the new tag (e.g., 'Work', 'Health', 'Personal Project')"
                    }
                },
                "required": ["name"]
            }),
        },
        ToolName::GetPets => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve all pets owned by the user, including their current state and feed status. Pets are obtained by hatching eggs with potions",
                    "获取用户拥有的全部宠物及其成长状态，宠物通过用药水孵化蛋获得",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolName::FeedPet => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Feed food to a pet to increase its growth or transform it into a mount. Different foods have different effects on pets",
                    "给宠物喂食以促进成长或将其变为坐骑，不同食物对宠物有不同效果",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pet": {
                        "type": "string",
                        "description": "The key identifier of the pet to feed (e.g., 'Wolf-Base', 'Dragon-Red')"
                    },
                    "food": {
                        "type": "string",
                        "description": "The key identifier of the food item to use (e.g., 'Meat', 'Milk', 'Potatoe')"
                    }
                },
                "required": ["pet", "food"]
            }),
        },
        ToolName::HatchPet => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Hatch a new pet by combining an egg with a hatching potion. This consumes both items and creates a new pet",
                    "用蛋和孵化药水孵化新宠物，两种物品都会被消耗",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "egg": {
                        "type": "string",
                        "description": "The key identifier of the egg to hatch (e.g., 'Wolf', 'Dragon', 'Cactus')"
                    },
                    "hatchingPotion": {
                        "type": "string",
                        "description": "The key identifier of the hatching potion to use (e.g., 'Base', 'Red', 'Blue')"
                    }
                },
                "required": ["egg", "hatchingPotion"]
            }),
        },
        ToolName::GetMounts => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve all mounts owned by the user. Mounts are obtained by feeding pets until they transform",
                    "获取用户拥有的全部坐骑，坐骑由宠物喂食成长转化而来",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolName::EquipItem => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Equip or unequip items such as armor, pets, mounts, or costume pieces to change your character's appearance and stats",
                    "装备或卸下护甲、宠物、坐骑或服装部件，改变角色的外观和属性",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["mount", "pet", "costume", "equipped"],
                        "description": "Category of equipment: 'mount' for riding, 'pet' for companion, 'costume' for cosmetic items, 'equipped' for stat-affecting gear"
                    },
                    "key": {
                        "type": "string",
                        "description": "The unique identifier of the item to equip or 'null' to unequip the current item in that slot"
                    }
                },
                "required": ["type", "key"]
            }),
        },
        ToolName::GetNotifications => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve all pending notifications including party invites, quest updates, achievement notifications, and system messages",
                    "获取全部未处理通知，包括队伍邀请、任务进展、成就和系统消息",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolName::ReadNotification => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Mark a specific notification as read to remove it from the notifications list",
                    "将指定通知标记为已读，并将其从通知列表中移除",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "notificationId": {
                        "type": "string",
                        "description": "Unique identifier of the notification to mark as read (obtained from get_notifications)"
                    }
                },
                "required": ["notificationId"]
            }),
        },
        ToolName::GetShop => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Browse available items in various Habitica shops including seasonal items, quest scrolls, and special equipment",
                    "浏览 Habitica 各商店在售的物品，包括季节限定、任务卷轴和特殊装备",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "shopType": {
                        "type": "string",
                        "enum": ["market", "questShop", "timeTravelersShop", "seasonalShop"],
                        "description": "Shop category: 'market' for basic items, 'questShop' for quest scrolls, 'timeTravelersShop' for past event items, 'seasonalShop' for current event items"
                    }
                }
            }),
        },
        ToolName::BuyItem => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Purchase items from shops using gold or gems. Check shop availability first with get_shop",
                    "用金币或宝石从商店购买物品，购买前可先用 get_shop 查看在售物品",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "itemKey": {
                        "type": "string",
                        "description": "Unique identifier of the item to purchase (obtained from get_shop)"
                    },
                    "quantity": {
                        "type": "number",
                        "description": "Number of items to purchase (default: 1). Some items have purchase limits",
                        "default": 1
                    }
                },
                "required": ["itemKey"]
            }),
        },
        ToolName::AddChecklistItem => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Add a new checklist item (sub-task) to an existing task. Useful for breaking down complex tasks into smaller steps",
                    "为已有任务添加清单项（子任务），便于把复杂任务拆解成小步骤",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the parent task to add the checklist item to (obtained from get_tasks)"
                    },
                    "text": {
                        "type": "string",
                        "description": "Description of the checklist item/sub-task to add"
                    }
                },
                "required": ["taskId", "text"]
            }),
        },
        ToolName::UpdateChecklistItem => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Modify an existing checklist item's text or completion status. Only provide the fields you want to change",
                    "修改清单项的文字或完成状态，只需提供想要更改的字段",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the parent task containing the checklist item"
                    },
                    "itemId": {
                        "type": "string",
                        "description": "Unique identifier of the checklist item to update (obtained from get_task_checklist)"
                    },
                    "text": {
                        "type": "string",
                        "description": "New text/description for the checklist item"
                    },
                    "completed": {
                        "type": "boolean",
                        "description": "Set completion status: true to mark as completed, false to mark as incomplete"
                    }
                },
                "required": ["taskId", "itemId"]
            }),
        },
        ToolName::DeleteChecklistItem => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Permanently remove a checklist item from a task. This action cannot be undone",
                    "从任务中永久删除清单项，此操作无法撤销",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the parent task containing the checklist item"
                    },
                    "itemId": {
                        "type": "string",
                        "description": "Unique identifier of the checklist item to delete (obtained from get_task_checklist)"
                    }
                },
                "required": ["taskId", "itemId"]
            }),
        },
        ToolName::GetTaskChecklist => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Retrieve all checklist items for a specific task, showing their completion status and unique identifiers",
                    "获取指定任务的全部清单项，并显示完成状态和唯一标识",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the task whose checklist items to retrieve"
                    }
                },
                "required": ["taskId"]
            }),
        },
        ToolName::ScoreChecklistItem => ToolDefinition {
            name: tool.as_str().to_string(),
            description: lang
                .select(
                    "Toggle completion status of a checklist item. If incomplete, marks as complete; if complete, marks as incomplete",
                    "切换清单项的完成状态：未完成的标记为完成，已完成的标记为未完成",
                )
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "taskId": {
                        "type": "string",
                        "description": "Unique identifier of the parent task containing the checklist item"
                    },
                    "itemId": {
                        "type": "string",
                        "description": "Unique identifier of the checklist item to toggle (obtained from get_task_checklist)"
                    }
                },
                "required": ["taskId", "itemId"]
            }),
        },
    }
}
